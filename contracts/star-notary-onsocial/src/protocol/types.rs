use near_sdk::json_types::U128;
use near_sdk::near;
use near_sdk::AccountId;

#[near(serializers = [json])]
#[serde(tag = "type", rename_all = "snake_case")]
#[derive(Clone, Debug)]
pub enum Action {
    CreateAsset {
        asset_id: u64,
        name: String,
    },
    ListForSale {
        asset_id: u64,
        price: U128,
    },
    Buy {
        asset_id: u64,
    },
    Exchange {
        asset_a: u64,
        asset_b: u64,
    },
    Transfer {
        receiver_id: AccountId,
        asset_id: u64,
    },
}
