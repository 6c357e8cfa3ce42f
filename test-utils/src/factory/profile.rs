//! Profile factory for creating test profiles, attachments and channel groups.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use serde_json::json;

/// Creates a member profile with its details, at-a-glance, personality and images.
///
/// # Arguments
/// - `db` - Database connection
/// - `guild_id` - Guild whose profile manager owns the profile
/// - `user_id` - Member the profile belongs to
///
/// # Returns
/// - `Ok(entity::profile::Model)` - Created profile
/// - `Err(DbErr)` - Database error during insert
pub async fn create_profile(
    db: &DatabaseConnection,
    guild_id: i64,
    user_id: i64,
) -> Result<entity::profile::Model, DbErr> {
    let profile = entity::profile::ActiveModel {
        id: ActiveValue::NotSet,
        user_id: ActiveValue::Set(user_id),
        guild_id: ActiveValue::Set(guild_id),
        post_url: ActiveValue::Set(None),
    }
    .insert(db)
    .await?;

    entity::profile_details::ActiveModel {
        profile_id: ActiveValue::Set(profile.id),
        name: ActiveValue::Set(Some(format!("Character {}", next_id()))),
        custom_url: ActiveValue::Set(None),
        color: ActiveValue::Set(None),
        jobs: ActiveValue::Set(json!([])),
        rates: ActiveValue::Set(None),
    }
    .insert(db)
    .await?;

    entity::profile_at_a_glance::ActiveModel {
        profile_id: ActiveValue::Set(profile.id),
        world: ActiveValue::Set(None),
        gender_enum: ActiveValue::Set(None),
        pronouns: ActiveValue::Set(json!([])),
        race_enum: ActiveValue::Set(None),
        clan_enum: ActiveValue::Set(None),
        orientation_enum: ActiveValue::Set(None),
        race_custom: ActiveValue::Set(None),
        clan_custom: ActiveValue::Set(None),
        orientation_custom: ActiveValue::Set(None),
        height: ActiveValue::Set(None),
        age: ActiveValue::Set(None),
        mare: ActiveValue::Set(None),
    }
    .insert(db)
    .await?;

    entity::profile_personality::ActiveModel {
        profile_id: ActiveValue::Set(profile.id),
        likes: ActiveValue::Set(None),
        dislikes: ActiveValue::Set(None),
        personality: ActiveValue::Set(None),
        aboutme: ActiveValue::Set(None),
    }
    .insert(db)
    .await?;

    entity::profile_images::ActiveModel {
        profile_id: ActiveValue::Set(profile.id),
        thumbnail_url: ActiveValue::Set(None),
        main_image_url: ActiveValue::Set(None),
    }
    .insert(db)
    .await?;

    Ok(profile)
}

/// Adds an additional image to a profile's images.
pub async fn create_additional_image(
    db: &DatabaseConnection,
    profile_id: i32,
) -> Result<entity::profile_additional_image::Model, DbErr> {
    entity::profile_additional_image::ActiveModel {
        id: ActiveValue::NotSet,
        profile_id: ActiveValue::Set(profile_id),
        url: ActiveValue::Set(format!("https://img.example/{}.png", next_id())),
        caption: ActiveValue::Set(None),
    }
    .insert(db)
    .await
}

/// Creates a channel group under the guild's profile manager.
pub async fn create_channel_group(
    db: &DatabaseConnection,
    guild_id: i64,
) -> Result<entity::profile_channel_group::Model, DbErr> {
    entity::profile_channel_group::ActiveModel {
        id: ActiveValue::NotSet,
        guild_id: ActiveValue::Set(guild_id),
        channel_ids: ActiveValue::Set(json!([])),
        role_ids: ActiveValue::Set(json!([])),
    }
    .insert(db)
    .await
}
