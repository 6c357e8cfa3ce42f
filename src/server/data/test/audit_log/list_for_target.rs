use super::*;
use serde_json::json;

/// Tests reading the history of one resource.
///
/// Verifies that entries of another resource kind with the same id are excluded and
/// that recorded diffs are returned as stored.
///
/// Expected: Ok with only the `EmbedField` entry
#[tokio::test]
async fn filters_by_kind_and_id() -> Result<(), AppError> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;

    let mut changes = Map::new();
    changes.insert("name".to_string(), json!({ "old": "A", "new": "B" }));
    audit::record_change(
        db,
        guild.guild_id,
        ResourceKind::EmbedField,
        3,
        AuditOperation::Update,
        10,
        changes,
    )
    .await?;
    audit::record_change(
        db,
        guild.guild_id,
        ResourceKind::Embed,
        3,
        AuditOperation::Update,
        10,
        Map::new(),
    )
    .await?;

    let entries = AuditLogRepository::new(db)
        .list_for_target(ResourceKind::EmbedField, 3)
        .await?;

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].target, "EmbedField");
    assert_eq!(entries[0].changes, json!({ "name": { "old": "A", "new": "B" } }));

    Ok(())
}
