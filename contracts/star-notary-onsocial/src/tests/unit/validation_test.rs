use crate::validation::{validate_asset_name, validate_registry_metadata};
use crate::*;

#[test]
fn asset_name_length_limit() {
    assert!(validate_asset_name("").is_ok());
    assert!(validate_asset_name(&"a".repeat(MAX_ASSET_NAME_LEN)).is_ok());
    assert!(matches!(
        validate_asset_name(&"a".repeat(MAX_ASSET_NAME_LEN + 1)),
        Err(NotaryError::InvalidInput(_))
    ));
}

#[test]
fn asset_name_limit_counts_bytes() {
    // Three bytes per char.
    let name = "\u{2B50}\u{FE0F}".repeat(MAX_ASSET_NAME_LEN / 6 + 1);
    assert!(name.chars().count() < MAX_ASSET_NAME_LEN);
    assert!(name.len() > MAX_ASSET_NAME_LEN);
    assert!(validate_asset_name(&name).is_err());
}

#[test]
fn registry_metadata_defaults_are_valid() {
    assert!(validate_registry_metadata(&NotaryMetadata::default()).is_ok());
}

#[test]
fn registry_metadata_rejects_empty_or_long_fields() {
    let long_name = "n".repeat(MAX_METADATA_NAME_LEN + 1);
    let long_symbol = "s".repeat(MAX_SYMBOL_LEN + 1);
    let cases = [
        ("", "SNT"),
        ("Star Notary NFT", ""),
        (" ", "SNT"),
        (long_name.as_str(), "SNT"),
        ("Star Notary NFT", long_symbol.as_str()),
    ];
    for (name, symbol) in cases {
        let metadata = NotaryMetadata {
            name: name.to_string(),
            symbol: symbol.to_string(),
        };
        assert!(
            validate_registry_metadata(&metadata).is_err(),
            "expected rejection for {name:?}/{symbol:?}"
        );
    }
}

#[test]
fn error_messages_are_readable() {
    assert_eq!(
        NotaryError::NotAnOwner.to_string(),
        "Not an owner: you can't exchange the asset you don't own"
    );
    assert_eq!(
        NotaryError::SelfExchange.to_string(),
        "Self exchange: sender is owner of both assets"
    );
    assert_eq!(
        NotaryError::insufficient_payment(10, 3).to_string(),
        "Insufficient payment: required 10, got 3"
    );
    assert_eq!(NotaryError::UnknownAsset(4).to_string(), "Unknown asset: 4");
}
