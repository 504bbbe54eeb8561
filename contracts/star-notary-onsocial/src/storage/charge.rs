use super::storage_byte_cost;
use crate::*;

impl Contract {
    /// Charges the caller for bytes written since `usage_before`, out of the pending balance.
    /// Freed bytes stay with the contract; a call never earns a credit.
    pub(crate) fn charge_storage_growth(
        &mut self,
        actor_id: &AccountId,
        usage_before: u64,
    ) -> Result<(), NotaryError> {
        let bytes_used = self.storage_usage_flushed().saturating_sub(usage_before);
        if bytes_used == 0 {
            return Ok(());
        }

        let cost = storage_byte_cost().saturating_mul(u128::from(bytes_used));
        if self.pending_attached_balance < cost {
            return Err(NotaryError::insufficient_storage(
                cost,
                self.pending_attached_balance,
            ));
        }
        self.pending_attached_balance -= cost;

        events::emit_storage_charged(actor_id, bytes_used, cost);
        Ok(())
    }
}
