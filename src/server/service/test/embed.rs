use super::*;
use crate::server::service::embed::EmbedService;
use serde_json::json;

/// Tests creating an embed.
///
/// Expected: Ok with images, header and footer provisioned and one Create entry
#[tokio::test]
async fn creates_embed_with_attachments() -> Result<(), AppError> {
    let test = TestBuilder::new().with_embed_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    let embed = EmbedService::new(db)
        .create(
            actor_in(guild.guild_id),
            Patch::new().set("title", "Rules").set("color", 255),
        )
        .await?;

    assert_eq!(embed.title.as_deref(), Some("Rules"));
    assert_eq!(embed.color, Some(255));
    assert!(EmbedImages::find_by_id(embed.id).one(db).await?.is_some());
    assert!(EmbedHeader::find_by_id(embed.id).one(db).await?.is_some());
    assert!(EmbedFooter::find_by_id(embed.id).one(db).await?.is_some());
    assert_eq!(AuditLog::find().count(db).await?, 1);

    Ok(())
}

/// Tests updating only the title of an embed with attachments and fields.
///
/// Verifies that the description and every nested child keep their stored values.
///
/// Expected: Ok with only `title` changed
#[tokio::test]
async fn partial_update_leaves_other_fields_and_children() -> Result<(), AppError> {
    let test = TestBuilder::new().with_embed_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    let embed = factory::embed::EmbedFactory::new(db, guild.guild_id)
        .title("Old")
        .description(Some("Body".to_string()))
        .build()
        .await?;
    let field = factory::create_embed_field(db, embed.id, 0).await?;
    let header = EmbedHeader::find_by_id(embed.id).one(db).await?.unwrap();

    let updated = EmbedService::new(db)
        .update(
            actor_in(guild.guild_id),
            embed.id,
            Patch::new().set("title", "New"),
        )
        .await?;

    assert_eq!(updated.title.as_deref(), Some("New"));
    assert_eq!(updated.description.as_deref(), Some("Body"));
    assert_eq!(
        EmbedField::find_by_id(field.id).one(db).await?.unwrap(),
        field
    );
    assert_eq!(
        EmbedHeader::find_by_id(embed.id).one(db).await?.unwrap(),
        header
    );

    Ok(())
}

/// Tests an explicit null in a patch.
///
/// Expected: Ok with `description` cleared and `title` untouched
#[tokio::test]
async fn explicit_null_clears_field() -> Result<(), AppError> {
    let test = TestBuilder::new().with_embed_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    let embed = factory::embed::EmbedFactory::new(db, guild.guild_id)
        .title("Kept")
        .description(Some("Cleared".to_string()))
        .build()
        .await?;

    let updated = EmbedService::new(db)
        .update(
            actor_in(guild.guild_id),
            embed.id,
            Patch::new().null("description"),
        )
        .await?;

    assert_eq!(updated.title.as_deref(), Some("Kept"));
    assert_eq!(updated.description, None);

    Ok(())
}

/// Tests two sequential color updates.
///
/// Verifies that the second audit entry's `old` is the first entry's `new`.
///
/// Expected: Ok with chained `{old, new}` pairs
#[tokio::test]
async fn sequential_updates_chain_audit_values() -> Result<(), AppError> {
    let test = TestBuilder::new().with_embed_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    let embed = factory::embed::EmbedFactory::new(db, guild.guild_id)
        .color(Some(1))
        .build()
        .await?;
    let service = EmbedService::new(db);
    let ctx = actor_in(guild.guild_id);

    service
        .update(ctx, embed.id, Patch::new().set("color", 2))
        .await?;
    service
        .update(ctx, embed.id, Patch::new().set("color", 3))
        .await?;

    let entries = AuditLogRepository::new(db)
        .list_for_target(ResourceKind::Embed, embed.id.into())
        .await?;
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].changes, json!({ "color": { "old": 1, "new": 2 } }));
    assert_eq!(entries[1].changes, json!({ "color": { "old": 2, "new": 3 } }));
    assert_eq!(
        entries[1].changes["color"]["old"],
        entries[0].changes["color"]["new"]
    );

    Ok(())
}

/// Tests updating an embed of another guild.
///
/// Expected: Err(Forbidden) with the embed unchanged and no audit entry
#[tokio::test]
async fn forbids_update_from_other_guild() -> Result<(), AppError> {
    let test = TestBuilder::new().with_embed_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_guild(db).await?;
    let intruder = factory::create_guild(db).await?;
    let embed = factory::embed::EmbedFactory::new(db, owner.guild_id)
        .title("Mine")
        .build()
        .await?;

    let result = EmbedService::new(db)
        .update(
            actor_in(intruder.guild_id),
            embed.id,
            Patch::new().set("title", "Stolen"),
        )
        .await;

    assert!(matches!(result, Err(AppError::Forbidden(_))));
    let stored = Embed::find_by_id(embed.id).one(db).await?.unwrap();
    assert_eq!(stored.title.as_deref(), Some("Mine"));
    assert_eq!(AuditLog::find().count(db).await?, 0);

    Ok(())
}

/// Tests updating a header attachment through its embed.
///
/// Expected: Ok with header text set and a single `EmbedHeader` Update entry
#[tokio::test]
async fn updates_header() -> Result<(), AppError> {
    let test = TestBuilder::new().with_embed_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    let embed = factory::create_embed(db, guild.guild_id).await?;

    let header = EmbedService::new(db)
        .update_header(
            actor_in(guild.guild_id),
            embed.id,
            Patch::new().set("text", "Welcome"),
        )
        .await?;

    assert_eq!(header.text.as_deref(), Some("Welcome"));
    let entries = AuditLogRepository::new(db)
        .list_for_target(ResourceKind::EmbedHeader, embed.id.into())
        .await?;
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].action, "Update");

    Ok(())
}

/// Tests the position assigned to fields after a delete.
///
/// Creates A, B, C, deletes B, then creates D.
///
/// Expected: D takes position 1 and positions stay unique
#[tokio::test]
async fn refills_hole_left_by_deleted_field() -> Result<(), AppError> {
    let test = TestBuilder::new().with_embed_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    let embed = factory::create_embed(db, guild.guild_id).await?;
    let service = EmbedService::new(db);
    let ctx = actor_in(guild.guild_id);

    let a = service
        .create_field(ctx, embed.id, Patch::new().set("name", "A"))
        .await?;
    let b = service
        .create_field(ctx, embed.id, Patch::new().set("name", "B"))
        .await?;
    let c = service
        .create_field(ctx, embed.id, Patch::new().set("name", "C"))
        .await?;
    assert_eq!((a.sort_order, b.sort_order, c.sort_order), (0, 1, 2));

    service.delete_field(ctx, embed.id, b.id).await?;
    let d = service
        .create_field(ctx, embed.id, Patch::new().set("name", "D"))
        .await?;

    assert_eq!(d.sort_order, 1);
    let mut positions: Vec<i32> = EmbedField::find()
        .filter(entity::embed_field::Column::EmbedId.eq(embed.id))
        .all(db)
        .await?
        .iter()
        .map(|field| field.sort_order)
        .collect();
    positions.sort_unstable();
    assert_eq!(positions, vec![0, 1, 2]);

    Ok(())
}

/// Tests an update that restates a field's own position past a hole.
///
/// Creates A, B, C, deletes B, then renames C while sending its current `sort_order`.
///
/// Expected: Ok with C renamed and still at position 2
#[tokio::test]
async fn keeps_own_position_after_delete() -> Result<(), AppError> {
    let test = TestBuilder::new().with_embed_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    let embed = factory::create_embed(db, guild.guild_id).await?;
    let service = EmbedService::new(db);
    let ctx = actor_in(guild.guild_id);

    service
        .create_field(ctx, embed.id, Patch::new().set("name", "A"))
        .await?;
    let b = service
        .create_field(ctx, embed.id, Patch::new().set("name", "B"))
        .await?;
    let c = service
        .create_field(ctx, embed.id, Patch::new().set("name", "C"))
        .await?;
    service.delete_field(ctx, embed.id, b.id).await?;

    let updated = service
        .update_field(
            ctx,
            embed.id,
            c.id,
            Patch::new().set("name", "C2").set("sort_order", 2),
        )
        .await?;

    assert_eq!(updated.name.as_deref(), Some("C2"));
    assert_eq!(updated.sort_order, 2);
    let stored = EmbedField::find_by_id(c.id).one(db).await?.unwrap();
    assert_eq!(stored, updated);

    Ok(())
}

/// Tests that a requested `sort_order` on create is ignored.
///
/// Expected: Ok with the field at the next free position
#[tokio::test]
async fn create_field_ignores_requested_position() -> Result<(), AppError> {
    let test = TestBuilder::new().with_embed_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    let embed = factory::create_embed(db, guild.guild_id).await?;
    factory::create_embed_field(db, embed.id, 0).await?;

    let field = EmbedService::new(db)
        .create_field(
            actor_in(guild.guild_id),
            embed.id,
            Patch::new().set("sort_order", 9),
        )
        .await?;

    assert_eq!(field.sort_order, 1);

    Ok(())
}

/// Tests moving a field onto a position held by another field.
///
/// Expected: Err(Conflict) with both fields unchanged and no audit entry
#[tokio::test]
async fn rejects_move_to_occupied_position() -> Result<(), AppError> {
    let test = TestBuilder::new().with_embed_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    let embed = factory::create_embed(db, guild.guild_id).await?;
    factory::create_embed_field(db, embed.id, 0).await?;
    let second = factory::create_embed_field(db, embed.id, 1).await?;

    let result = EmbedService::new(db)
        .update_field(
            actor_in(guild.guild_id),
            embed.id,
            second.id,
            Patch::new().set("sort_order", 0),
        )
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
    let stored = EmbedField::find_by_id(second.id).one(db).await?.unwrap();
    assert_eq!(stored.sort_order, 1);
    assert_eq!(AuditLog::find().count(db).await?, 0);

    Ok(())
}

/// Tests moving a field into a free position.
///
/// Expected: Ok with the new position stored
#[tokio::test]
async fn moves_field_to_free_position() -> Result<(), AppError> {
    let test = TestBuilder::new().with_embed_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    let embed = factory::create_embed(db, guild.guild_id).await?;
    factory::create_embed_field(db, embed.id, 0).await?;
    let moving = factory::create_embed_field(db, embed.id, 2).await?;

    let moved = EmbedService::new(db)
        .update_field(
            actor_in(guild.guild_id),
            embed.id,
            moving.id,
            Patch::new().set("sort_order", 1),
        )
        .await?;

    assert_eq!(moved.sort_order, 1);

    Ok(())
}

/// Tests updating a field through an embed it does not belong to.
///
/// Expected: Err(Forbidden)
#[tokio::test]
async fn forbids_field_of_other_embed() -> Result<(), AppError> {
    let test = TestBuilder::new().with_embed_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    let embed = factory::create_embed(db, guild.guild_id).await?;
    let other = factory::create_embed(db, guild.guild_id).await?;
    let field = factory::create_embed_field(db, other.id, 0).await?;

    let result = EmbedService::new(db)
        .update_field(
            actor_in(guild.guild_id),
            embed.id,
            field.id,
            Patch::new().set("name", "x"),
        )
        .await;

    assert!(matches!(result, Err(AppError::Forbidden(_))));

    Ok(())
}

/// Tests deleting an embed.
///
/// Expected: Ok with the embed, attachments and fields gone and a Delete entry kept
#[tokio::test]
async fn deletes_embed_subtree() -> Result<(), AppError> {
    let test = TestBuilder::new().with_embed_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    let embed = factory::create_embed(db, guild.guild_id).await?;
    factory::create_embed_field(db, embed.id, 0).await?;
    factory::create_embed_field(db, embed.id, 1).await?;

    let removed = EmbedService::new(db)
        .delete(actor_in(guild.guild_id), embed.id)
        .await?;

    assert_eq!(removed, 6);
    assert!(Embed::find_by_id(embed.id).one(db).await?.is_none());
    assert!(EmbedImages::find_by_id(embed.id).one(db).await?.is_none());
    assert!(EmbedHeader::find_by_id(embed.id).one(db).await?.is_none());
    assert!(EmbedFooter::find_by_id(embed.id).one(db).await?.is_none());
    assert_eq!(EmbedField::find().count(db).await?, 0);

    let entries = AuditLogRepository::new(db)
        .list_for_target(ResourceKind::Embed, embed.id.into())
        .await?;
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].action, "Delete");

    Ok(())
}
