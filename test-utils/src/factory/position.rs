//! Position factory for creating test staffable positions.

use crate::factory::helpers::{next_id, next_snowflake};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a named position with a role in the guild.
pub async fn create_position(
    db: &DatabaseConnection,
    guild_id: i64,
) -> Result<entity::position::Model, DbErr> {
    entity::position::ActiveModel {
        id: ActiveValue::NotSet,
        guild_id: ActiveValue::Set(guild_id),
        name: ActiveValue::Set(Some(format!("Position {}", next_id()))),
        role_id: ActiveValue::Set(Some(next_snowflake())),
    }
    .insert(db)
    .await
}
