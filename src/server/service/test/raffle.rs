use super::*;
use crate::server::service::raffle::RaffleService;

/// Tests creating a raffle with partial fields.
///
/// Expected: Ok with supplied fields set and defaults elsewhere
#[tokio::test]
async fn creates_raffle_with_defaults() -> Result<(), AppError> {
    let test = TestBuilder::new().with_raffle_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    let raffle = RaffleService::new(db)
        .create(
            actor_in(guild.guild_id),
            Patch::new().set("name", "Weekly").set("is_active", true),
        )
        .await?;

    assert_eq!(raffle.name.as_deref(), Some("Weekly"));
    assert!(raffle.is_active);
    assert_eq!(raffle.cost, 100_000);
    assert_eq!(raffle.num_winners, 1);

    Ok(())
}

/// Tests buying tickets without a quantity.
///
/// Expected: Ok with one ticket owned by the acting user
#[tokio::test]
async fn creates_entry_with_one_ticket() -> Result<(), AppError> {
    let test = TestBuilder::new().with_raffle_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    let raffle = factory::create_raffle(db, guild.guild_id).await?;
    let ctx = actor_in(guild.guild_id);

    let entry = RaffleService::new(db)
        .create_entry(ctx, raffle.id, Patch::new())
        .await?;

    assert_eq!(entry.quantity, 1);
    assert_eq!(entry.user_id, ctx.actor_id);

    Ok(())
}

/// Tests updating an entry to zero tickets.
///
/// Expected: Err(Validation) with the entry unchanged
#[tokio::test]
async fn rejects_non_positive_quantity() -> Result<(), AppError> {
    let test = TestBuilder::new().with_raffle_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    let raffle = factory::create_raffle(db, guild.guild_id).await?;
    let entry = factory::create_raffle_entry(db, raffle.id, 5, 3).await?;

    let result = RaffleService::new(db)
        .update_entry(
            actor_in(guild.guild_id),
            raffle.id,
            entry.id,
            Patch::new().set("quantity", 0),
        )
        .await;

    assert!(matches!(result, Err(AppError::Validation(_))));
    let stored = RaffleEntry::find_by_id(entry.id).one(db).await?.unwrap();
    assert_eq!(stored.quantity, 3);

    Ok(())
}

/// Tests deleting another guild's raffle.
///
/// Expected: Err(Forbidden) with the raffle and its entries kept
#[tokio::test]
async fn forbids_delete_from_other_guild() -> Result<(), AppError> {
    let test = TestBuilder::new().with_raffle_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_guild(db).await?;
    let intruder = factory::create_guild(db).await?;
    let raffle = factory::create_raffle(db, owner.guild_id).await?;
    factory::create_raffle_entry(db, raffle.id, 5, 1).await?;

    let result = RaffleService::new(db)
        .delete(actor_in(intruder.guild_id), raffle.id)
        .await;

    assert!(matches!(result, Err(AppError::Forbidden(_))));
    assert!(Raffle::find_by_id(raffle.id).one(db).await?.is_some());
    assert_eq!(RaffleEntry::find().count(db).await?, 1);

    Ok(())
}

/// Tests deleting a raffle with entries.
///
/// Expected: Ok with the raffle and every entry removed
#[tokio::test]
async fn deletes_raffle_with_entries() -> Result<(), AppError> {
    let test = TestBuilder::new().with_raffle_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    let raffle = factory::create_raffle(db, guild.guild_id).await?;
    factory::create_raffle_entry(db, raffle.id, 5, 1).await?;
    factory::create_raffle_entry(db, raffle.id, 6, 2).await?;

    let removed = RaffleService::new(db)
        .delete(actor_in(guild.guild_id), raffle.id)
        .await?;

    assert_eq!(removed, 3);
    assert_eq!(Raffle::find().count(db).await?, 0);
    assert_eq!(RaffleEntry::find().count(db).await?, 0);

    Ok(())
}
