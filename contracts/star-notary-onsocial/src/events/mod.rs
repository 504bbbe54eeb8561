mod builder;
mod types;

mod asset;
mod contract;
mod storage;

pub use asset::*;
pub use contract::*;
pub use storage::*;

pub(crate) const STANDARD: &str = "onsocial";
pub(crate) const VERSION: &str = "1.0.0";
pub(crate) const PREFIX: &str = "EVENT_JSON:";

pub(crate) const ASSET: &str = "ASSET_UPDATE";
pub(crate) const CONTRACT: &str = "CONTRACT_UPDATE";
pub(crate) const STORAGE: &str = "STORAGE_UPDATE";
