use super::*;
use crate::server::service::profile::ProfileService;

/// Tests creating a profile.
///
/// Expected: Ok with the acting user as owner and all four sections provisioned
#[tokio::test]
async fn creates_profile_with_sections() -> Result<(), AppError> {
    let test = TestBuilder::new().with_profile_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    let ctx = actor_in(guild.guild_id);

    let profile = ProfileService::new(db).create(ctx, Patch::new()).await?;

    assert_eq!(profile.user_id, ctx.actor_id);
    assert!(ProfileDetails::find_by_id(profile.id).one(db).await?.is_some());
    assert!(ProfileAtAGlance::find_by_id(profile.id).one(db).await?.is_some());
    assert!(ProfilePersonality::find_by_id(profile.id).one(db).await?.is_some());
    assert!(ProfileImages::find_by_id(profile.id).one(db).await?.is_some());

    Ok(())
}

/// Tests creating a second profile for the same user in one guild.
///
/// Expected: Err(Conflict)
#[tokio::test]
async fn rejects_second_profile_for_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_profile_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    let ctx = actor_in(guild.guild_id);
    factory::create_profile(db, guild.guild_id, ctx.actor_id).await?;

    let result = ProfileService::new(db).create(ctx, Patch::new()).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
    assert_eq!(Profile::find().count(db).await?, 1);

    Ok(())
}

/// Tests toggling one profile requirement.
///
/// Expected: Ok with `jobs` required and every other toggle unchanged
#[tokio::test]
async fn updates_requirements() -> Result<(), AppError> {
    let test = TestBuilder::new().with_profile_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;

    let requirements = ProfileService::new(db)
        .update_requirements(actor_in(guild.guild_id), Patch::new().set("jobs", true))
        .await?;

    let mut expected = factory::guild::requirements(guild.guild_id);
    expected.jobs = true;
    assert_eq!(requirements, expected);

    Ok(())
}

/// Tests adding a gallery image without a url.
///
/// Expected: Err(Validation)
#[tokio::test]
async fn requires_url_for_additional_image() -> Result<(), AppError> {
    let test = TestBuilder::new().with_profile_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    let profile = factory::create_profile(db, guild.guild_id, 5).await?;

    let result = ProfileService::new(db)
        .add_additional_image(
            actor_in(guild.guild_id),
            profile.id,
            Patch::new().set("caption", "No image"),
        )
        .await;

    assert!(matches!(result, Err(AppError::Validation(_))));

    Ok(())
}

/// Tests editing an image that belongs to a different profile.
///
/// Expected: Err(Forbidden)
#[tokio::test]
async fn forbids_image_of_other_profile() -> Result<(), AppError> {
    let test = TestBuilder::new().with_profile_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    let profile = factory::create_profile(db, guild.guild_id, 5).await?;
    let other = factory::create_profile(db, guild.guild_id, 6).await?;
    let image = factory::create_additional_image(db, other.id).await?;

    let result = ProfileService::new(db)
        .update_additional_image(
            actor_in(guild.guild_id),
            profile.id,
            image.id,
            Patch::new().set("caption", "x"),
        )
        .await;

    assert!(matches!(result, Err(AppError::Forbidden(_))));

    Ok(())
}

/// Tests deleting a profile with gallery images.
///
/// Expected: Ok with the profile, its sections and images removed and other profiles kept
#[tokio::test]
async fn deletes_profile_subtree() -> Result<(), AppError> {
    let test = TestBuilder::new().with_profile_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    let profile = factory::create_profile(db, guild.guild_id, 5).await?;
    let kept = factory::create_profile(db, guild.guild_id, 6).await?;
    factory::create_additional_image(db, profile.id).await?;
    factory::create_additional_image(db, profile.id).await?;

    let removed = ProfileService::new(db)
        .delete(actor_in(guild.guild_id), profile.id)
        .await?;

    // profile, four sections, two images
    assert_eq!(removed, 7);
    assert!(Profile::find_by_id(profile.id).one(db).await?.is_none());
    assert!(ProfileImages::find_by_id(profile.id).one(db).await?.is_none());
    assert_eq!(ProfileAdditionalImage::find().count(db).await?, 0);
    assert!(Profile::find_by_id(kept.id).one(db).await?.is_some());

    Ok(())
}

/// Tests updating then deleting a channel group.
///
/// Expected: Ok with the role list replaced, then the group removed
#[tokio::test]
async fn updates_and_deletes_channel_group() -> Result<(), AppError> {
    let test = TestBuilder::new().with_profile_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    let group = factory::create_channel_group(db, guild.guild_id).await?;
    let service = ProfileService::new(db);
    let ctx = actor_in(guild.guild_id);

    let updated = service
        .update_channel_group(
            ctx,
            group.id,
            Patch::new().set("role_ids", serde_json::json!([1, 2])),
        )
        .await?;
    assert_eq!(updated.role_ids, serde_json::json!([1, 2]));

    service.delete_channel_group(ctx, group.id).await?;
    assert!(ProfileChannelGroup::find_by_id(group.id).one(db).await?.is_none());

    Ok(())
}

/// Tests a duplicate profile that bypasses the service's own check.
///
/// Expected: the second insert surfaces as Err(Conflict) and the same user may still
/// hold a profile in another guild
#[tokio::test]
async fn unique_index_rejects_duplicate_profile() -> Result<(), AppError> {
    let test = TestBuilder::new().with_profile_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    let other = factory::create_guild(db).await?;
    factory::create_profile(db, guild.guild_id, 5).await?;

    let result = factory::create_profile(db, guild.guild_id, 5)
        .await
        .map_err(AppError::from);

    assert!(matches!(result, Err(AppError::Conflict(_))));
    factory::create_profile(db, other.guild_id, 5).await?;
    assert_eq!(Profile::find().count(db).await?, 2);

    Ok(())
}
