use crate::*;

impl Contract {
    pub(crate) fn asset(&self, asset_id: u64) -> Result<&Asset, NotaryError> {
        self.assets
            .get(&asset_id)
            .ok_or(NotaryError::UnknownAsset(asset_id))
    }

    pub(crate) fn owner_id_of(&self, asset_id: u64) -> Result<&AccountId, NotaryError> {
        self.asset(asset_id).map(|asset| &asset.owner_id)
    }

    /// Reassigns the owner slot and returns the previous owner.
    /// Performs no permission check; authorization belongs to the calling engine.
    pub(crate) fn set_owner(
        &mut self,
        asset_id: u64,
        new_owner_id: &AccountId,
    ) -> Result<AccountId, NotaryError> {
        let asset = self
            .assets
            .get_mut(&asset_id)
            .ok_or(NotaryError::UnknownAsset(asset_id))?;
        let previous_owner_id = std::mem::replace(&mut asset.owner_id, new_owner_id.clone());
        if &previous_owner_id == new_owner_id {
            return Ok(previous_owner_id);
        }

        self.decrement_holdings(&previous_owner_id);
        self.increment_holdings(new_owner_id);

        Ok(previous_owner_id)
    }

    pub(crate) fn increment_holdings(&mut self, owner_id: &AccountId) {
        *self.holdings.entry(owner_id.clone()).or_insert(0) += 1;
    }

    pub(crate) fn decrement_holdings(&mut self, owner_id: &AccountId) {
        let Some(count) = self.holdings.get_mut(owner_id) else {
            return;
        };
        *count = count.saturating_sub(1);
        if *count == 0 {
            self.holdings.remove(owner_id);
        }
    }

    pub(crate) fn holdings_of(&self, account_id: &AccountId) -> u64 {
        self.holdings.get(account_id).copied().unwrap_or(0)
    }
}
