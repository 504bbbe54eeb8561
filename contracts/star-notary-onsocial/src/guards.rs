use crate::*;

impl Contract {
    pub(crate) fn check_asset_owner(
        &self,
        asset_id: u64,
        actor_id: &AccountId,
    ) -> Result<(), NotaryError> {
        if self.owner_id_of(asset_id)? != actor_id {
            return Err(NotaryError::NotOwner(asset_id));
        }
        Ok(())
    }
}
