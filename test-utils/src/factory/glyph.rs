//! Glyph message factory.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use serde_json::json;

/// Creates a glyph message in the guild with a one-line body.
pub async fn create_glyph_message(
    db: &DatabaseConnection,
    guild_id: i64,
) -> Result<entity::glyph_message::Model, DbErr> {
    let id = next_id();

    entity::glyph_message::ActiveModel {
        id: ActiveValue::NotSet,
        guild_id: ActiveValue::Set(guild_id),
        name: ActiveValue::Set(Some(format!("Glyph {}", id))),
        message: ActiveValue::Set(Some(json!({ "content": format!("Message {}", id) }))),
    }
    .insert(db)
    .await
}
