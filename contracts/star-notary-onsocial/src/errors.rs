use near_sdk::json_types::U128;
use near_sdk_macros::NearSchema;

#[derive(NearSchema, near_sdk::FunctionError)]
#[abi(json)]
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub enum NotaryError {
    DuplicateAsset(u64),
    UnknownAsset(u64),
    NotOwner(u64),
    NotListed(u64),
    InsufficientPayment { required: U128, attached: U128 },
    InsufficientStorage { required: U128, attached: U128 },
    NotAnOwner,
    SelfExchange,
    InvalidInput(String),
}

impl std::fmt::Display for NotaryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateAsset(id) => write!(f, "Duplicate asset: {} already exists", id),
            Self::UnknownAsset(id) => write!(f, "Unknown asset: {}", id),
            Self::NotOwner(id) => {
                write!(f, "Not owner: sender can't transfer an asset that is not owned ({})", id)
            }
            Self::NotListed(id) => write!(f, "Not listed: asset {} is not up for sale", id),
            Self::InsufficientPayment { required, attached } => write!(
                f,
                "Insufficient payment: required {}, got {}",
                required.0, attached.0
            ),
            Self::InsufficientStorage { required, attached } => write!(
                f,
                "Insufficient storage: required {}, remaining deposit {}",
                required.0, attached.0
            ),
            Self::NotAnOwner => write!(f, "Not an owner: you can't exchange the asset you don't own"),
            Self::SelfExchange => write!(f, "Self exchange: sender is owner of both assets"),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
        }
    }
}

impl NotaryError {
    pub fn insufficient_payment(required: u128, attached: u128) -> Self {
        Self::InsufficientPayment {
            required: U128(required),
            attached: U128(attached),
        }
    }

    pub fn insufficient_storage(required: u128, attached: u128) -> Self {
        Self::InsufficientStorage {
            required: U128(required),
            attached: U128(attached),
        }
    }
}
