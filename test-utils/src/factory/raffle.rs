//! Raffle factory for creating test raffles and entries.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use serde_json::json;

/// Creates an active raffle under the guild's raffle manager.
///
/// # Arguments
/// - `db` - Database connection
/// - `guild_id` - Guild whose manager owns the raffle
///
/// # Returns
/// - `Ok(entity::raffle::Model)` - Created raffle
/// - `Err(DbErr)` - Database error during insert
pub async fn create_raffle(
    db: &DatabaseConnection,
    guild_id: i64,
) -> Result<entity::raffle::Model, DbErr> {
    let id = next_id();
    entity::raffle::ActiveModel {
        id: ActiveValue::NotSet,
        guild_id: ActiveValue::Set(guild_id),
        winners: ActiveValue::Set(json!([])),
        is_active: ActiveValue::Set(true),
        post_url: ActiveValue::Set(None),
        name: ActiveValue::Set(Some(format!("Raffle {}", id))),
        prize: ActiveValue::Set(Some(format!("Prize {}", id))),
        num_winners: ActiveValue::Set(1),
        auto_notify: ActiveValue::Set(true),
        cost: ActiveValue::Set(100_000),
        rolled_at: ActiveValue::Set(None),
        rolled_by: ActiveValue::Set(None),
    }
    .insert(db)
    .await
}

/// Buys tickets for a user.
pub async fn create_raffle_entry(
    db: &DatabaseConnection,
    raffle_id: i32,
    user_id: i64,
    quantity: i32,
) -> Result<entity::raffle_entry::Model, DbErr> {
    entity::raffle_entry::ActiveModel {
        id: ActiveValue::NotSet,
        raffle_id: ActiveValue::Set(raffle_id),
        user_id: ActiveValue::Set(user_id),
        quantity: ActiveValue::Set(quantity),
    }
    .insert(db)
    .await
}
