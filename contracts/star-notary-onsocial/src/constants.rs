pub const MAX_ASSET_NAME_LEN: usize = 256;
pub const MAX_METADATA_NAME_LEN: usize = 64;
pub const MAX_SYMBOL_LEN: usize = 16;

pub const DEFAULT_REGISTRY_NAME: &str = "Star Notary NFT";
pub const DEFAULT_REGISTRY_SYMBOL: &str = "SNT";

// Sized for the compensation branch of `on_seller_paid`.
pub const GAS_SELLER_PAID_CALLBACK_TGAS: u64 = 20;
