use near_sdk::json_types::U128;
use near_sdk::serde_json::Value;
use near_sdk::store::LookupMap;
use near_sdk::{AccountId, Gas, NearToken, PanicOnDefault, Promise, env, near};

pub mod constants;
mod errors;
mod guards;
mod validation;

mod events;
mod protocol;

mod exchange;
mod market;
mod registry;
mod settlement;
mod transfer;

mod admin;
mod config;
mod dispatch;
mod execute;
mod metadata;
mod storage;

#[cfg(test)]
mod tests;

pub use config::NotaryConfig;
pub use constants::*;
pub use errors::NotaryError;
pub use market::Listing;
pub use metadata::NotaryMetadata;
pub use protocol::Action;
pub use registry::{Asset, AssetView};
pub use settlement::Settlement;
pub use storage::StorageKey;
pub use validation::default_true;

#[near(
    contract_state,
    contract_metadata(
        version = "0.1.0",
        link = "https://github.com/OnSocial-Labs/onsocial-protocol",
        standard(standard = "nep297", version = "1.0.0"),
    )
)]
#[derive(PanicOnDefault)]
pub struct Contract {
    pub version: String,
    pub config: NotaryConfig,

    pub assets: LookupMap<u64, Asset>,
    // Ownership invariant: each count equals the number of `assets` entries naming that owner; zero counts are removed.
    pub(crate) holdings: LookupMap<AccountId, u64>,

    // Listing invariant: an entry exists only while `seller_id` is the asset's current owner.
    pub listings: LookupMap<u64, Listing>,

    // Persistence invariant: transient execution balance is non-persistent and excluded from serialization.
    #[borsh(skip)]
    pub pending_attached_balance: u128,
}
