//! Giveaway factory for creating test giveaways, details and entries.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use serde_json::json;

/// Creates a giveaway under the guild's giveaway manager, with its details.
///
/// # Arguments
/// - `db` - Database connection
/// - `guild_id` - Guild whose manager owns the giveaway
///
/// # Returns
/// - `Ok(entity::giveaway::Model)` - Created giveaway
/// - `Err(DbErr)` - Database error during insert
pub async fn create_giveaway(
    db: &DatabaseConnection,
    guild_id: i64,
) -> Result<entity::giveaway::Model, DbErr> {
    let giveaway = entity::giveaway::ActiveModel {
        id: ActiveValue::NotSet,
        guild_id: ActiveValue::Set(guild_id),
        winners: ActiveValue::Set(json!([])),
        post_url: ActiveValue::Set(None),
        rolled_at: ActiveValue::Set(None),
        rolled_by: ActiveValue::Set(None),
    }
    .insert(db)
    .await?;

    let id = next_id();
    entity::giveaway_details::ActiveModel {
        giveaway_id: ActiveValue::Set(giveaway.id),
        name: ActiveValue::Set(Some(format!("Giveaway {}", id))),
        prize: ActiveValue::Set(Some(format!("Prize {}", id))),
        num_winners: ActiveValue::Set(1),
        auto_notify: ActiveValue::Set(true),
        description: ActiveValue::Set(None),
        thumbnail_url: ActiveValue::Set(None),
        color: ActiveValue::Set(None),
        end_dt: ActiveValue::Set(None),
        emoji: ActiveValue::Set(None),
    }
    .insert(db)
    .await?;

    Ok(giveaway)
}

/// Enters a user into a giveaway.
pub async fn create_giveaway_entry(
    db: &DatabaseConnection,
    giveaway_id: i32,
    user_id: i64,
) -> Result<entity::giveaway_entry::Model, DbErr> {
    entity::giveaway_entry::ActiveModel {
        id: ActiveValue::NotSet,
        giveaway_id: ActiveValue::Set(giveaway_id),
        user_id: ActiveValue::Set(user_id),
        timestamp: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}
