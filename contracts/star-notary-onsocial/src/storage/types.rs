use near_sdk::BorshStorageKey;
use near_sdk::near;

#[inline]
pub(crate) fn storage_byte_cost() -> u128 {
    near_sdk::env::storage_byte_cost().as_yoctonear()
}

#[near]
#[derive(BorshStorageKey)]
pub enum StorageKey {
    Assets,
    Holdings,
    Listings,
}
