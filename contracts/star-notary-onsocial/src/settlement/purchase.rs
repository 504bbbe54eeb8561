use crate::*;

/// Outcome of a purchase as seen by the buyer.
#[near(serializers = [json])]
#[derive(Clone, Debug, PartialEq)]
pub struct Settlement {
    pub seller_id: AccountId,
    pub price: U128,
    pub refund: U128,
}

impl Contract {
    pub(crate) fn buy(
        &mut self,
        buyer_id: &AccountId,
        asset_id: u64,
        payment: u128,
    ) -> Result<Settlement, NotaryError> {
        let listing = self.active_listing(asset_id)?;
        let price = listing.price.0;
        if payment < price {
            return Err(NotaryError::insufficient_payment(price, payment));
        }
        let seller_id = listing.seller_id.clone();
        let refund = payment - price;

        // Every check has passed; nothing below can fail part-way.
        self.clear_listing(asset_id);
        self.set_owner(asset_id, buyer_id)?;

        if price > 0 {
            self.pay_seller(buyer_id, &seller_id, asset_id, price);
        }
        // Token accounting guarantee: overpayment returns to the pending balance for the caller refund.
        self.pending_attached_balance += refund;

        events::emit_asset_purchased(&events::AssetPurchase {
            buyer_id,
            seller_id: &seller_id,
            asset_id,
            price,
            payment,
            refund,
        });

        Ok(Settlement {
            seller_id,
            price: U128(price),
            refund: U128(refund),
        })
    }

    fn pay_seller(&self, buyer_id: &AccountId, seller_id: &AccountId, asset_id: u64, price: u128) {
        let _ = Promise::new(seller_id.clone())
            .transfer(NearToken::from_yoctonear(price))
            .then(
                Self::ext(env::current_account_id())
                    .with_static_gas(Gas::from_tgas(GAS_SELLER_PAID_CALLBACK_TGAS))
                    .on_seller_paid(buyer_id.clone(), seller_id.clone(), asset_id, U128(price)),
            );
    }
}
