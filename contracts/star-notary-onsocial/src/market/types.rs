use near_sdk::json_types::U128;
use near_sdk::near;
use near_sdk::AccountId;

#[near(serializers = [borsh, json])]
#[derive(Clone, Debug, PartialEq)]
pub struct Listing {
    pub seller_id: AccountId,
    pub price: U128,
    pub listed_at: u64,
}
