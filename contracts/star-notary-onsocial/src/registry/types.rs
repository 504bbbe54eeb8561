use near_sdk::json_types::U128;
use near_sdk::near;
use near_sdk::AccountId;

#[near(serializers = [borsh, json])]
#[derive(Clone, Debug, PartialEq)]
pub struct Asset {
    pub name: String,
    pub owner_id: AccountId,
    pub created_at: u64,
}

#[near(serializers = [json])]
#[derive(Clone, Debug)]
pub struct AssetView {
    pub asset_id: u64,
    pub name: String,
    pub owner_id: AccountId,
    pub created_at: u64,
    pub listing_price: Option<U128>,
}
