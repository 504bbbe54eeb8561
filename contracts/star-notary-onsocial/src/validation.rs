use crate::*;

pub(crate) fn validate_asset_name(name: &str) -> Result<(), NotaryError> {
    if name.len() > MAX_ASSET_NAME_LEN {
        return Err(NotaryError::InvalidInput(format!(
            "Asset name exceeds max length of {} bytes (got {} bytes)",
            MAX_ASSET_NAME_LEN,
            name.len()
        )));
    }
    Ok(())
}

pub(crate) fn validate_registry_metadata(metadata: &NotaryMetadata) -> Result<(), NotaryError> {
    if metadata.name.trim().is_empty() || metadata.name.len() > MAX_METADATA_NAME_LEN {
        return Err(NotaryError::InvalidInput(format!(
            "Registry name must be 1-{} bytes",
            MAX_METADATA_NAME_LEN
        )));
    }
    if metadata.symbol.trim().is_empty() || metadata.symbol.len() > MAX_SYMBOL_LEN {
        return Err(NotaryError::InvalidInput(format!(
            "Registry symbol must be 1-{} bytes",
            MAX_SYMBOL_LEN
        )));
    }
    Ok(())
}

pub fn default_true() -> bool {
    true
}
