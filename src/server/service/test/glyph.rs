use super::*;
use crate::server::service::glyph::GlyphMessageService;
use serde_json::json;

/// Tests creating a glyph message with a structured body.
///
/// Expected: Ok with the body stored as sent
#[tokio::test]
async fn creates_glyph_message() -> Result<(), AppError> {
    let test = TestBuilder::new().with_glyph_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    let body = json!({ "content": "Roulette at 8", "glyphs": [1, 2] });

    let message = GlyphMessageService::new(db)
        .create(
            actor_in(guild.guild_id),
            Patch::new().set("name", "Roulette").set("message", body.clone()),
        )
        .await?;

    assert_eq!(message.guild_id, guild.guild_id);
    assert_eq!(message.message, Some(body));

    Ok(())
}

/// Tests replacing the body of a glyph message.
///
/// Expected: Ok with the old body replaced and `{old, new}` recorded for `message` only
#[tokio::test]
async fn replaces_message_body() -> Result<(), AppError> {
    let test = TestBuilder::new().with_glyph_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    let message = factory::create_glyph_message(db, guild.guild_id).await?;
    let body = json!({ "content": "Updated" });

    let updated = GlyphMessageService::new(db)
        .update(
            actor_in(guild.guild_id),
            message.id,
            Patch::new().set("message", body.clone()),
        )
        .await?;

    assert_eq!(updated.message, Some(body.clone()));
    assert_eq!(updated.name, message.name);

    let entries = AuditLogRepository::new(db)
        .list_for_target(ResourceKind::GlyphMessage, message.id.into())
        .await?;
    assert_eq!(entries.len(), 1);
    assert_eq!(
        entries[0].changes,
        json!({ "message": { "old": message.message, "new": body } })
    );

    Ok(())
}

/// Tests updating another guild's glyph message.
///
/// Expected: Err(Forbidden) with the message unchanged
#[tokio::test]
async fn forbids_update_from_other_guild() -> Result<(), AppError> {
    let test = TestBuilder::new().with_glyph_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_guild(db).await?;
    let intruder = factory::create_guild(db).await?;
    let message = factory::create_glyph_message(db, owner.guild_id).await?;

    let result = GlyphMessageService::new(db)
        .update(
            actor_in(intruder.guild_id),
            message.id,
            Patch::new().set("name", "Taken"),
        )
        .await;

    assert!(matches!(result, Err(AppError::Forbidden(_))));
    let stored = GlyphMessage::find_by_id(message.id).one(db).await?.unwrap();
    assert_eq!(stored, message);

    Ok(())
}
