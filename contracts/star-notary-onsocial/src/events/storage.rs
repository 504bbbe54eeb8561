use near_sdk::AccountId;

use super::STORAGE;
use super::builder::EventBuilder;

pub fn emit_deposit_refund(account_id: &AccountId, amount: u128) {
    EventBuilder::new(STORAGE, "refund_unused_deposit", account_id)
        .field("account_id", account_id)
        .field("amount", amount)
        .emit();
}

pub fn emit_storage_charged(account_id: &AccountId, bytes: u64, cost: u128) {
    EventBuilder::new(STORAGE, "storage_charge", account_id)
        .field("account_id", account_id)
        .field("bytes", bytes)
        .field("cost", cost)
        .emit();
}
