use crate::*;

impl Contract {
    pub(crate) fn transfer(
        &mut self,
        actor_id: &AccountId,
        receiver_id: &AccountId,
        asset_id: u64,
    ) -> Result<(), NotaryError> {
        self.check_asset_owner(asset_id, actor_id)?;

        self.set_owner(asset_id, receiver_id)?;
        // Listing invariant: a listing never outlives the owner that placed it.
        let delisted = self.clear_listing(asset_id).is_some();

        events::emit_asset_transferred(actor_id, receiver_id, asset_id, delisted);
        Ok(())
    }
}
