use near_sdk::AccountId;
use near_sdk::json_types::U128;

use super::ASSET;
use super::builder::EventBuilder;

pub fn emit_asset_created(creator_id: &AccountId, asset_id: u64, name: &str) {
    EventBuilder::new(ASSET, "create", creator_id)
        .field("owner_id", creator_id)
        .field("asset_id", asset_id)
        .field("name", name)
        .emit();
}

pub fn emit_asset_listed(
    owner_id: &AccountId,
    asset_id: u64,
    price: U128,
    old_price: Option<U128>,
) {
    EventBuilder::new(ASSET, "list", owner_id)
        .field("owner_id", owner_id)
        .field("asset_id", asset_id)
        .field("price", price)
        .field_opt("old_price", old_price)
        .emit();
}

pub struct AssetPurchase<'a> {
    pub buyer_id: &'a AccountId,
    pub seller_id: &'a AccountId,
    pub asset_id: u64,
    pub price: u128,
    pub payment: u128,
    pub refund: u128,
}

pub fn emit_asset_purchased(e: &AssetPurchase) {
    EventBuilder::new(ASSET, "purchase", e.buyer_id)
        .field("buyer_id", e.buyer_id)
        .field("seller_id", e.seller_id)
        .field("asset_id", e.asset_id)
        .field("price", e.price)
        .field("payment", e.payment)
        .field("refund", e.refund)
        .emit();
}

pub fn emit_purchase_reverted(
    buyer_id: &AccountId,
    seller_id: &AccountId,
    asset_id: u64,
    price: U128,
) {
    EventBuilder::new(ASSET, "purchase_reverted", buyer_id)
        .field("buyer_id", buyer_id)
        .field("seller_id", seller_id)
        .field("asset_id", asset_id)
        .field("price", price)
        .field("reason", "seller_payment_failed")
        .emit();
}

pub fn emit_assets_exchanged(
    actor_id: &AccountId,
    asset_a: u64,
    owner_a: &AccountId,
    asset_b: u64,
    owner_b: &AccountId,
) {
    EventBuilder::new(ASSET, "exchange", actor_id)
        .field("asset_a", asset_a)
        .field("new_owner_a", owner_b)
        .field("asset_b", asset_b)
        .field("new_owner_b", owner_a)
        .emit();
}

pub fn emit_asset_transferred(
    old_owner_id: &AccountId,
    new_owner_id: &AccountId,
    asset_id: u64,
    delisted: bool,
) {
    EventBuilder::new(ASSET, "transfer", old_owner_id)
        .field("old_owner_id", old_owner_id)
        .field("new_owner_id", new_owner_id)
        .field("asset_id", asset_id)
        .field("delisted", delisted)
        .emit();
}
