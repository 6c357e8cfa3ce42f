//! Reaction-role factory for creating test messages and roles.

use crate::factory::helpers::{next_id, next_snowflake};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a reaction-role message under the guild's reaction-role manager.
pub async fn create_reaction_role_message(
    db: &DatabaseConnection,
    guild_id: i64,
) -> Result<entity::reaction_role_message::Model, DbErr> {
    entity::reaction_role_message::ActiveModel {
        id: ActiveValue::NotSet,
        guild_id: ActiveValue::Set(guild_id),
        title: ActiveValue::Set(Some(format!("Roles {}", next_id()))),
        description: ActiveValue::Set(None),
        thumbnail_url: ActiveValue::Set(None),
        post_url: ActiveValue::Set(None),
        msg_type: ActiveValue::Set(1),
        type_param: ActiveValue::Set(None),
        color: ActiveValue::Set(None),
    }
    .insert(db)
    .await
}

/// Adds a role button to a reaction-role message.
pub async fn create_reaction_role(
    db: &DatabaseConnection,
    message_id: i32,
) -> Result<entity::reaction_role::Model, DbErr> {
    entity::reaction_role::ActiveModel {
        id: ActiveValue::NotSet,
        message_id: ActiveValue::Set(message_id),
        role_id: ActiveValue::Set(Some(next_snowflake())),
        emoji: ActiveValue::Set(None),
        label: ActiveValue::Set(Some(format!("Role {}", next_id()))),
    }
    .insert(db)
    .await
}
