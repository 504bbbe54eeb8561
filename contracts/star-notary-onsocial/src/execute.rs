use crate::*;

#[near]
impl Contract {
    /// Single apply path for every state change. The caller is the predecessor account and the
    /// attached deposit is the payment; net storage growth is charged to the caller from it, and
    /// whatever is left is refunded.
    #[payable]
    #[handle_result]
    pub fn execute(&mut self, action: Action) -> Result<Value, NotaryError> {
        let actor_id = env::predecessor_account_id();
        self.pending_attached_balance = env::attached_deposit().as_yoctonear();

        let usage_before = self.storage_usage_flushed();
        let result = self
            .dispatch_action(action, &actor_id)
            .and_then(|value| {
                self.charge_storage_growth(&actor_id, usage_before)?;
                Ok(value)
            });

        // Accounting invariant: pending balance never leaks past the call, success or not.
        let remaining = core::mem::take(&mut self.pending_attached_balance);
        if result.is_ok() {
            self.refund_unused_deposit(&actor_id, remaining);
        }

        result
    }
}
