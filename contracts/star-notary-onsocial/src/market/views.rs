use crate::*;

#[near]
impl Contract {
    #[handle_result]
    pub fn listing_price_of(&self, asset_id: u64) -> Result<U128, NotaryError> {
        self.active_listing(asset_id).map(|listing| listing.price)
    }

    pub fn get_listing(&self, asset_id: u64) -> Option<Listing> {
        self.active_listing(asset_id).ok().cloned()
    }
}
