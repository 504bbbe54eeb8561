use near_sdk::AccountId;

use super::CONTRACT;
use super::builder::EventBuilder;
use crate::NotaryConfig;

pub fn emit_contract_initialized(contract_id: &AccountId, version: &str, config: &NotaryConfig) {
    EventBuilder::new(CONTRACT, "init", contract_id)
        .field("version", version)
        .field("name", config.metadata.name.as_str())
        .field("symbol", config.metadata.symbol.as_str())
        .field("allow_free_listings", config.allow_free_listings)
        .emit();
}
