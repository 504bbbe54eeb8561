use crate::validation::validate_asset_name;
use crate::*;

impl Contract {
    pub(crate) fn create_asset(
        &mut self,
        creator_id: &AccountId,
        asset_id: u64,
        name: String,
    ) -> Result<u64, NotaryError> {
        validate_asset_name(&name)?;
        if self.assets.contains_key(&asset_id) {
            return Err(NotaryError::DuplicateAsset(asset_id));
        }

        events::emit_asset_created(creator_id, asset_id, &name);

        self.assets.insert(
            asset_id,
            Asset {
                name,
                owner_id: creator_id.clone(),
                created_at: env::block_timestamp(),
            },
        );
        self.increment_holdings(creator_id);

        Ok(asset_id)
    }
}
