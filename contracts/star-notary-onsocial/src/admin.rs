use crate::*;

#[near]
impl Contract {
    #[init]
    pub fn new(config: Option<NotaryConfig>) -> Self {
        let config = config.unwrap_or_default();
        if let Err(e) = config.validate() {
            env::panic_str(&e.to_string());
        }

        let contract = Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            config,
            assets: LookupMap::new(StorageKey::Assets),
            holdings: LookupMap::new(StorageKey::Holdings),
            listings: LookupMap::new(StorageKey::Listings),
            pending_attached_balance: 0,
        };

        events::emit_contract_initialized(
            &env::current_account_id(),
            &contract.version,
            &contract.config,
        );
        contract
    }

    pub fn get_config(&self) -> NotaryConfig {
        self.config.clone()
    }

    pub fn get_version(&self) -> String {
        self.version.clone()
    }
}
