use crate::*;

impl Contract {
    /// Swaps the owners of two assets. The caller must own exactly one of them.
    pub(crate) fn exchange(
        &mut self,
        actor_id: &AccountId,
        asset_a: u64,
        asset_b: u64,
    ) -> Result<(), NotaryError> {
        let owner_a = self.owner_id_of(asset_a)?.clone();
        let owner_b = self.owner_id_of(asset_b)?.clone();

        if actor_id != &owner_a && actor_id != &owner_b {
            return Err(NotaryError::NotAnOwner);
        }
        // Caller owns at least one, so equal owners means the caller owns both.
        if owner_a == owner_b {
            return Err(NotaryError::SelfExchange);
        }

        self.set_owner(asset_a, &owner_b)?;
        self.set_owner(asset_b, &owner_a)?;
        self.clear_listing(asset_a);
        self.clear_listing(asset_b);

        events::emit_assets_exchanged(actor_id, asset_a, &owner_a, asset_b, &owner_b);
        Ok(())
    }
}
