use crate::*;

#[near]
impl Contract {
    /// Compensates a purchase whose seller payment bounced. Returns `true` when the sale was rolled back.
    #[private]
    pub fn on_seller_paid(
        &mut self,
        buyer_id: AccountId,
        seller_id: AccountId,
        asset_id: u64,
        price: U128,
    ) -> bool {
        if env::promise_results_count() == 1 && env::promise_result_checked(0, 16).is_ok() {
            return false;
        }

        // State-transition guarantee: if ownership moved on during the callback window, keep current state.
        match self.owner_id_of(asset_id) {
            Ok(owner_id) if owner_id == &buyer_id => {}
            _ => {
                env::log_str(&format!(
                    "Seller payment for asset {} failed but ownership changed; keeping current state",
                    asset_id
                ));
                return false;
            }
        }

        // Listing invariant: a listing the buyer placed in the meantime must not survive the revert.
        self.clear_listing(asset_id);
        if self.set_owner(asset_id, &seller_id).is_err() {
            return false;
        }
        self.listings.insert(
            asset_id,
            Listing {
                seller_id: seller_id.clone(),
                price,
                listed_at: env::block_timestamp(),
            },
        );

        // The failed transfer returned `price` to this account; hand it back to the buyer.
        let _ = Promise::new(buyer_id.clone()).transfer(NearToken::from_yoctonear(price.0));

        events::emit_purchase_reverted(&buyer_id, &seller_id, asset_id, price);
        true
    }
}
