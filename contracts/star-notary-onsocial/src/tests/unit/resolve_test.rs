use crate::tests::test_utils::*;
use crate::*;
use near_sdk::json_types::U128;
use near_sdk::{PromiseResult, RuntimeFeesConfig, test_vm_config, testing_env};

const PRICE: u128 = ONE_NEAR;

fn sold_to_bob(asset_id: u64) -> Contract {
    let mut contract = new_contract();
    create_listed(&mut contract, &alice(), asset_id, PRICE);
    testing_env!(context(bob()).build());
    contract.buy(&bob(), asset_id, PRICE).unwrap();
    contract
}

#[test]
fn successful_seller_payment_keeps_sale() {
    let mut contract = sold_to_bob(1);

    testing_env!(
        context(notary()).build(),
        test_vm_config(),
        RuntimeFeesConfig::test(),
        Default::default(),
        vec![PromiseResult::Successful(vec![])],
    );
    assert!(!contract.on_seller_paid(bob(), alice(), 1, U128(PRICE)));

    assert_eq!(contract.owner_of(1).unwrap(), bob());
    assert!(contract.get_listing(1).is_none());
    assert!(event_operations().is_empty());
}

// Without promise results the seller payment reads as failed.

#[test]
fn failed_seller_payment_reverts_sale() {
    let mut contract = sold_to_bob(1);

    testing_env!(context(notary()).build());
    let reverted = contract.on_seller_paid(bob(), alice(), 1, U128(PRICE));

    assert!(reverted);
    assert_eq!(contract.owner_of(1).unwrap(), alice());
    assert_eq!(contract.balance_of(bob()), 0);
    assert_eq!(contract.listing_price_of(1).unwrap().0, PRICE);
    assert_eq!(event_operations(), vec!["purchase_reverted"]);
}

#[test]
fn failed_seller_payment_drops_buyer_relisting() {
    let mut contract = sold_to_bob(1);
    contract.list_for_sale(&bob(), 1, U128(PRICE * 10)).unwrap();

    testing_env!(context(notary()).build());
    assert!(contract.on_seller_paid(bob(), alice(), 1, U128(PRICE)));

    let listing = contract.get_listing(1).unwrap();
    assert_eq!(listing.seller_id, alice());
    assert_eq!(listing.price.0, PRICE);
}

#[test]
fn failed_seller_payment_after_resale_keeps_current_state() {
    let mut contract = sold_to_bob(1);
    contract.transfer(&bob(), &charlie(), 1).unwrap();

    testing_env!(context(notary()).build());
    let reverted = contract.on_seller_paid(bob(), alice(), 1, U128(PRICE));

    assert!(!reverted);
    assert_eq!(contract.owner_of(1).unwrap(), charlie());
    assert!(contract.get_listing(1).is_none());
    assert!(event_operations().is_empty());
}

#[test]
fn failed_seller_payment_for_unknown_asset_is_ignored() {
    let mut contract = new_contract();

    testing_env!(context(notary()).build());
    assert!(!contract.on_seller_paid(bob(), alice(), 42, U128(PRICE)));
    assert!(contract.get_asset(42).is_none());
}
