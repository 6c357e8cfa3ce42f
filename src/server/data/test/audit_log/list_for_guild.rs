use super::*;

/// Tests listing the audit trail of a guild.
///
/// Verifies that entries come back in insertion order and that entries of other
/// guilds are excluded.
///
/// Expected: Ok with the two entries of the guild, oldest first
#[tokio::test]
async fn returns_guild_entries_in_order() -> Result<(), AppError> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    let other = factory::create_guild(db).await?;

    audit::record_change(
        db,
        guild.guild_id,
        ResourceKind::Embed,
        1,
        AuditOperation::Create,
        10,
        Map::new(),
    )
    .await?;
    audit::record_change(
        db,
        other.guild_id,
        ResourceKind::Embed,
        2,
        AuditOperation::Create,
        10,
        Map::new(),
    )
    .await?;
    audit::record_change(
        db,
        guild.guild_id,
        ResourceKind::Embed,
        1,
        AuditOperation::Delete,
        11,
        Map::new(),
    )
    .await?;

    let entries = AuditLogRepository::new(db)
        .list_for_guild(guild.guild_id)
        .await?;

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].action, "Create");
    assert_eq!(entries[1].action, "Delete");
    assert_eq!(entries[1].user_id, 11);
    assert!(entries.iter().all(|entry| entry.guild_id == guild.guild_id));

    Ok(())
}

/// Tests listing a guild with no recorded mutations.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn returns_empty_for_quiet_guild() -> Result<(), AppError> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;

    let entries = AuditLogRepository::new(db)
        .list_for_guild(guild.guild_id)
        .await?;

    assert!(entries.is_empty());

    Ok(())
}
