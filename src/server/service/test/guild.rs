use super::*;
use crate::server::service::{embed::EmbedService, guild::GuildService};

/// Tests creating a guild.
///
/// Verifies that every guild-level singleton is provisioned and that the whole
/// creation is audited once.
///
/// Expected: Ok with configuration, managers and requirements stored and one audit entry
#[tokio::test]
async fn creates_guild_with_singletons() -> Result<(), AppError> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let ctx = actor_in(next_snowflake());
    let guild = GuildService::new(db).create(ctx).await?;

    assert_eq!(guild.guild_id, ctx.guild_id);
    let config = GuildConfiguration::find_by_id(ctx.guild_id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(config.timezone, 7);
    assert!(GiveawayManager::find_by_id(ctx.guild_id).one(db).await?.is_some());
    assert!(RaffleManager::find_by_id(ctx.guild_id).one(db).await?.is_some());
    assert!(ReactionRoleManager::find_by_id(ctx.guild_id).one(db).await?.is_some());
    assert!(ProfileManager::find_by_id(ctx.guild_id).one(db).await?.is_some());
    assert!(ProfileRequirements::find_by_id(ctx.guild_id).one(db).await?.is_some());

    let entries = AuditLogRepository::new(db).list_for_guild(ctx.guild_id).await?;
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].target, "Guild");
    assert_eq!(entries[0].action, "Create");
    assert_eq!(entries[0].user_id, ctx.actor_id);

    Ok(())
}

/// Tests creating a guild that already exists.
///
/// Expected: Err(Conflict) with no second audit entry
#[tokio::test]
async fn rejects_duplicate_guild() -> Result<(), AppError> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    let result = GuildService::new(db).create(actor_in(guild.guild_id)).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
    assert_eq!(AuditLog::find().count(db).await?, 0);

    Ok(())
}

/// Tests updating one configuration field.
///
/// Expected: Ok with `timezone` changed and `log_channel_id` untouched
#[tokio::test]
async fn updates_configuration() -> Result<(), AppError> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::guild::GuildFactory::new(db)
        .log_channel_id(Some(42))
        .build()
        .await?;
    let config = GuildService::new(db)
        .update_configuration(actor_in(guild.guild_id), Patch::new().set("timezone", -5))
        .await?;

    assert_eq!(config.timezone, -5);
    assert_eq!(config.log_channel_id, Some(42));

    Ok(())
}

/// Tests patching a field the configuration does not expose.
///
/// Expected: Err(Validation)
#[tokio::test]
async fn rejects_unknown_configuration_field() -> Result<(), AppError> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    let result = GuildService::new(db)
        .update_configuration(
            actor_in(guild.guild_id),
            Patch::new().set("guild_id", 1),
        )
        .await;

    assert!(matches!(result, Err(AppError::Validation(_))));

    Ok(())
}

/// Tests deleting a guild with resources in several families.
///
/// Verifies by direct lookup that nothing of the guild remains while its audit trail,
/// including the delete itself, is kept.
///
/// Expected: Ok with every table of the guild empty and audit entries intact
#[tokio::test]
async fn deletes_guild_and_keeps_audit_trail() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    let ctx = actor_in(guild.guild_id);

    let embed = EmbedService::new(db)
        .create(ctx, Patch::new().set("title", "Rules"))
        .await?;
    let form = factory::create_form(db, guild.guild_id).await?;
    let question = factory::create_question(db, form.id, 0).await?;
    factory::create_option(db, question.id, 0).await?;
    let giveaway = factory::create_giveaway(db, guild.guild_id).await?;
    factory::create_giveaway_entry(db, giveaway.id, 5).await?;
    let profile = factory::create_profile(db, guild.guild_id, 5).await?;
    factory::create_additional_image(db, profile.id).await?;
    factory::create_position(db, guild.guild_id).await?;
    factory::create_glyph_message(db, guild.guild_id).await?;

    GuildService::new(db).delete(ctx).await?;

    assert!(Guild::find_by_id(guild.guild_id).one(db).await?.is_none());
    assert!(GuildConfiguration::find_by_id(guild.guild_id).one(db).await?.is_none());
    assert!(Embed::find_by_id(embed.id).one(db).await?.is_none());
    assert_eq!(EmbedImages::find().count(db).await?, 0);
    assert_eq!(Form::find().count(db).await?, 0);
    assert_eq!(FormPrompt::find().count(db).await?, 0);
    assert_eq!(FormQuestionOption::find().count(db).await?, 0);
    assert_eq!(Giveaway::find().count(db).await?, 0);
    assert_eq!(GiveawayEntry::find().count(db).await?, 0);
    assert_eq!(Profile::find().count(db).await?, 0);
    assert_eq!(ProfileAdditionalImage::find().count(db).await?, 0);
    assert_eq!(ProfileRequirements::find().count(db).await?, 0);
    assert_eq!(Position::find().count(db).await?, 0);
    assert_eq!(GlyphMessage::find().count(db).await?, 0);

    let entries = AuditLogRepository::new(db).list_for_guild(guild.guild_id).await?;
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].target, "Embed");
    assert_eq!(entries[1].target, "Guild");
    assert_eq!(entries[1].action, "Delete");
    assert_eq!(entries[1].target_id, guild.guild_id);

    Ok(())
}

/// Tests deleting a guild that was never created.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn fails_to_delete_missing_guild() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = GuildService::new(db).delete(actor_in(next_snowflake())).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
