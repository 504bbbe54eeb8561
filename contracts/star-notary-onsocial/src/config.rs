use crate::*;

/// Deployment-time settings. Fixed by `new`, never mutated afterwards.
#[near(serializers = [borsh, json])]
#[derive(Clone, Debug, PartialEq)]
pub struct NotaryConfig {
    #[serde(default)]
    pub metadata: NotaryMetadata,
    /// Zero-price listings are accepted when `true` (the default).
    #[serde(default = "crate::default_true")]
    pub allow_free_listings: bool,
}

impl Default for NotaryConfig {
    fn default() -> Self {
        Self {
            metadata: NotaryMetadata::default(),
            allow_free_listings: true,
        }
    }
}

impl NotaryConfig {
    pub(crate) fn validate(&self) -> Result<(), NotaryError> {
        validation::validate_registry_metadata(&self.metadata)
    }
}
