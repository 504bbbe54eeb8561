use crate::*;

#[near]
impl Contract {
    #[handle_result]
    pub fn owner_of(&self, asset_id: u64) -> Result<AccountId, NotaryError> {
        self.owner_id_of(asset_id).cloned()
    }

    #[handle_result]
    pub fn metadata_of(&self, asset_id: u64) -> Result<String, NotaryError> {
        self.asset(asset_id).map(|asset| asset.name.clone())
    }

    /// Number of assets `account_id` currently owns; 0 for accounts that never held one.
    pub fn balance_of(&self, account_id: AccountId) -> u64 {
        self.holdings_of(&account_id)
    }

    pub fn get_asset(&self, asset_id: u64) -> Option<AssetView> {
        let asset = self.assets.get(&asset_id)?;
        Some(AssetView {
            asset_id,
            name: asset.name.clone(),
            owner_id: asset.owner_id.clone(),
            created_at: asset.created_at,
            listing_price: self.active_listing(asset_id).ok().map(|listing| listing.price),
        })
    }
}
