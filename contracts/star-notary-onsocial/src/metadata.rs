use crate::*;

#[near(serializers = [borsh, json])]
#[derive(Clone, Debug, PartialEq)]
pub struct NotaryMetadata {
    pub name: String,
    pub symbol: String,
}

impl Default for NotaryMetadata {
    fn default() -> Self {
        Self {
            name: DEFAULT_REGISTRY_NAME.to_string(),
            symbol: DEFAULT_REGISTRY_SYMBOL.to_string(),
        }
    }
}

#[near]
impl Contract {
    pub fn name(&self) -> String {
        self.config.metadata.name.clone()
    }

    pub fn symbol(&self) -> String {
        self.config.metadata.symbol.clone()
    }

    pub fn contract_metadata(&self) -> NotaryMetadata {
        self.config.metadata.clone()
    }
}
