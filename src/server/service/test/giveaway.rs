use super::*;
use crate::server::service::giveaway::GiveawayService;

/// Tests creating a giveaway with details.
///
/// Expected: Ok with details stored under the giveaway's id and one `Giveaway` Create entry
#[tokio::test]
async fn creates_giveaway_with_details() -> Result<(), AppError> {
    let test = TestBuilder::new().with_giveaway_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    let (giveaway, details) = GiveawayService::new(db)
        .create(
            actor_in(guild.guild_id),
            Patch::new(),
            Patch::new().set("prize", "Mount").set("num_winners", 3),
        )
        .await?;

    assert_eq!(giveaway.guild_id, guild.guild_id);
    assert_eq!(details.giveaway_id, giveaway.id);
    assert_eq!(details.prize.as_deref(), Some("Mount"));
    assert_eq!(details.num_winners, 3);
    assert!(details.auto_notify);

    let entries = AuditLogRepository::new(db).list_for_guild(guild.guild_id).await?;
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].target, "Giveaway");

    Ok(())
}

/// Tests entering a giveaway twice as the same user.
///
/// Expected: Err(Conflict) on the second entry with one entry stored
#[tokio::test]
async fn rejects_second_entry_by_same_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_giveaway_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    let giveaway = factory::create_giveaway(db, guild.guild_id).await?;
    let service = GiveawayService::new(db);
    let ctx = actor_in(guild.guild_id);

    let entry = service.add_entry(ctx, giveaway.id).await?;
    assert_eq!(entry.user_id, ctx.actor_id);

    let result = service.add_entry(ctx, giveaway.id).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
    assert_eq!(GiveawayEntry::find().count(db).await?, 1);

    Ok(())
}

/// Tests updating the details of another guild's giveaway.
///
/// Expected: Err(Forbidden)
#[tokio::test]
async fn forbids_details_of_other_guild() -> Result<(), AppError> {
    let test = TestBuilder::new().with_giveaway_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_guild(db).await?;
    let intruder = factory::create_guild(db).await?;
    let giveaway = factory::create_giveaway(db, owner.guild_id).await?;

    let result = GiveawayService::new(db)
        .update_details(
            actor_in(intruder.guild_id),
            giveaway.id,
            Patch::new().set("prize", "Nothing"),
        )
        .await;

    assert!(matches!(result, Err(AppError::Forbidden(_))));

    Ok(())
}

/// Tests deleting a giveaway with entries.
///
/// Expected: Ok with the giveaway, its details and entries gone
#[tokio::test]
async fn deletes_giveaway_subtree() -> Result<(), AppError> {
    let test = TestBuilder::new().with_giveaway_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    let giveaway = factory::create_giveaway(db, guild.guild_id).await?;
    factory::create_giveaway_entry(db, giveaway.id, 1).await?;
    factory::create_giveaway_entry(db, giveaway.id, 2).await?;

    let removed = GiveawayService::new(db)
        .delete(actor_in(guild.guild_id), giveaway.id)
        .await?;

    assert_eq!(removed, 4);
    assert!(Giveaway::find_by_id(giveaway.id).one(db).await?.is_none());
    assert!(GiveawayDetails::find_by_id(giveaway.id).one(db).await?.is_none());
    assert_eq!(GiveawayEntry::find().count(db).await?, 0);
    assert!(GiveawayManager::find_by_id(guild.guild_id).one(db).await?.is_some());

    Ok(())
}

/// Tests a duplicate entry that bypasses the service's own check.
///
/// Inserts the same user twice directly, as two racing writers would.
///
/// Expected: the second insert surfaces as Err(Conflict)
#[tokio::test]
async fn unique_index_rejects_duplicate_entry() -> Result<(), AppError> {
    let test = TestBuilder::new().with_giveaway_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    let giveaway = factory::create_giveaway(db, guild.guild_id).await?;
    factory::create_giveaway_entry(db, giveaway.id, 5).await?;

    let result = factory::create_giveaway_entry(db, giveaway.id, 5)
        .await
        .map_err(AppError::from);

    assert!(matches!(result, Err(AppError::Conflict(_))));
    assert_eq!(GiveawayEntry::find().count(db).await?, 1);

    Ok(())
}
