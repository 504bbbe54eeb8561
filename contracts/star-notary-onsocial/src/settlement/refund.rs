use crate::*;

impl Contract {
    pub(crate) fn refund_unused_deposit(&self, account_id: &AccountId, amount: u128) {
        if amount == 0 {
            return;
        }
        let _ = Promise::new(account_id.clone()).transfer(NearToken::from_yoctonear(amount));
        events::emit_deposit_refund(account_id, amount);
    }
}
