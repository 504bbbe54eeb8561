use crate::*;

impl Contract {
    pub(crate) fn list_for_sale(
        &mut self,
        actor_id: &AccountId,
        asset_id: u64,
        price: U128,
    ) -> Result<(), NotaryError> {
        self.check_asset_owner(asset_id, actor_id)?;
        if price.0 == 0 && !self.config.allow_free_listings {
            return Err(NotaryError::InvalidInput(
                "Price must be greater than 0".into(),
            ));
        }

        let listing = Listing {
            seller_id: actor_id.clone(),
            price,
            listed_at: env::block_timestamp(),
        };
        let previous = self.listings.insert(asset_id, listing);

        events::emit_asset_listed(actor_id, asset_id, price, previous.map(|l| l.price));
        Ok(())
    }

    // Stale-listing guard: a listing whose seller no longer owns the asset counts as absent.
    pub(crate) fn active_listing(&self, asset_id: u64) -> Result<&Listing, NotaryError> {
        let listing = self
            .listings
            .get(&asset_id)
            .ok_or(NotaryError::NotListed(asset_id))?;
        if self.owner_id_of(asset_id)? != &listing.seller_id {
            return Err(NotaryError::NotListed(asset_id));
        }
        Ok(listing)
    }

    pub(crate) fn clear_listing(&mut self, asset_id: u64) -> Option<Listing> {
        self.listings.remove(&asset_id)
    }
}
