use super::*;
use crate::server::service::reaction_role::ReactionRoleService;

/// Tests adding a role to a message.
///
/// Expected: Ok with the role owned by the message and one `ReactionRole` Create entry
#[tokio::test]
async fn adds_role_to_message() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reaction_role_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    let message = factory::create_reaction_role_message(db, guild.guild_id).await?;

    let role = ReactionRoleService::new(db)
        .add_role(
            actor_in(guild.guild_id),
            message.id,
            Patch::new().set("role_id", 1234).set("emoji", "⚔"),
        )
        .await?;

    assert_eq!(role.message_id, message.id);
    assert_eq!(role.role_id, Some(1234));
    let entries = AuditLogRepository::new(db)
        .list_for_target(ResourceKind::ReactionRole, role.id.into())
        .await?;
    assert_eq!(entries.len(), 1);

    Ok(())
}

/// Tests updating a role through a message it is not on.
///
/// Expected: Err(Forbidden)
#[tokio::test]
async fn forbids_role_of_other_message() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reaction_role_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    let message = factory::create_reaction_role_message(db, guild.guild_id).await?;
    let other = factory::create_reaction_role_message(db, guild.guild_id).await?;
    let role = factory::create_reaction_role(db, other.id).await?;

    let result = ReactionRoleService::new(db)
        .update_role(
            actor_in(guild.guild_id),
            message.id,
            role.id,
            Patch::new().set("label", "x"),
        )
        .await;

    assert!(matches!(result, Err(AppError::Forbidden(_))));

    Ok(())
}

/// Tests deleting a message with roles.
///
/// Expected: Ok with the message and its roles removed
#[tokio::test]
async fn deletes_message_with_roles() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reaction_role_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    let message = factory::create_reaction_role_message(db, guild.guild_id).await?;
    factory::create_reaction_role(db, message.id).await?;
    factory::create_reaction_role(db, message.id).await?;

    let removed = ReactionRoleService::new(db)
        .delete_message(actor_in(guild.guild_id), message.id)
        .await?;

    assert_eq!(removed, 3);
    assert_eq!(ReactionRoleMessage::find().count(db).await?, 0);
    assert_eq!(ReactionRole::find().count(db).await?, 0);

    Ok(())
}

/// Tests updating the manager's channel.
///
/// Expected: Ok with `channel_id` set
#[tokio::test]
async fn updates_manager_channel() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reaction_role_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;

    let manager = ReactionRoleService::new(db)
        .update_manager(actor_in(guild.guild_id), Patch::new().set("channel_id", 99))
        .await?;

    assert_eq!(manager.channel_id, Some(99));

    Ok(())
}
