// =============================================================================
// Transfer Integration Tests
// =============================================================================

use anyhow::Result;

use super::helpers::*;

#[tokio::test]
async fn test_transfer_moves_asset() -> Result<()> {
    let worker = create_sandbox().await?;
    let contract = deploy_notary(&worker, None).await?;
    let alice = worker.dev_create_account().await?;
    let bob = worker.dev_create_account().await?;
    create_asset(&contract, &alice, 1, "gift").await?.into_result()?;

    transfer(&contract, &alice, &bob, 1).await?.into_result()?;

    assert_eq!(owner_of(&contract, 1).await?, bob.id().to_string());
    assert_eq!(balance_of(&contract, &alice).await?, 0);
    assert_eq!(balance_of(&contract, &bob).await?, 1);

    Ok(())
}

#[tokio::test]
async fn test_transfer_not_owner_fails() -> Result<()> {
    let worker = create_sandbox().await?;
    let contract = deploy_notary(&worker, None).await?;
    let alice = worker.dev_create_account().await?;
    let bob = worker.dev_create_account().await?;
    create_asset(&contract, &alice, 1, "gift").await?.into_result()?;

    let result = transfer(&contract, &bob, &bob, 1).await?;
    assert!(result.is_failure());
    assert!(failure_text(&result).contains("Not owner"));
    assert_eq!(owner_of(&contract, 1).await?, alice.id().to_string());

    Ok(())
}

#[tokio::test]
async fn test_transfer_delists_asset() -> Result<()> {
    let worker = create_sandbox().await?;
    let contract = deploy_notary(&worker, None).await?;
    let alice = worker.dev_create_account().await?;
    let bob = worker.dev_create_account().await?;
    let charlie = worker.dev_create_account().await?;
    create_asset(&contract, &alice, 1, "gift").await?.into_result()?;
    list_for_sale(&contract, &alice, 1, PRICE).await?.into_result()?;

    transfer(&contract, &alice, &bob, 1).await?.into_result()?;
    assert!(listing_price_of(&contract, 1).await?.is_none());

    let result = buy(&contract, &charlie, 1, PRICE).await?;
    assert!(result.is_failure(), "transferred asset must not be purchasable");
    assert_eq!(owner_of(&contract, 1).await?, bob.id().to_string());

    Ok(())
}
