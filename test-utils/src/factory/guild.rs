//! Guild factory for creating a tenant root with its guild-level singletons.

use crate::factory::helpers::next_snowflake;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, IntoActiveModel};

/// Factory for creating test guilds with customizable fields.
///
/// Inserts the guild row together with everything guild creation provisions:
/// configuration, the giveaway, raffle, reaction-role and profile managers, and profile
/// requirements. Requires `TestBuilder::with_guild_tables()`.
///
/// # Example
///
/// ```rust,ignore
/// let guild = GuildFactory::new(&db)
///     .timezone(-5)
///     .log_channel_id(Some(42))
///     .build()
///     .await?;
/// ```
pub struct GuildFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: i64,
    timezone: i32,
    log_channel_id: Option<i64>,
}

impl<'a> GuildFactory<'a> {
    /// Creates a new GuildFactory with default values.
    ///
    /// Defaults:
    /// - guild_id: unique snowflake
    /// - timezone: 7
    /// - log_channel_id: None
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entities
    ///
    /// # Returns
    /// - `GuildFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            guild_id: next_snowflake(),
            timezone: 7,
            log_channel_id: None,
        }
    }

    /// Sets the guild ID.
    pub fn guild_id(mut self, guild_id: i64) -> Self {
        self.guild_id = guild_id;
        self
    }

    /// Sets the configured timezone offset.
    pub fn timezone(mut self, timezone: i32) -> Self {
        self.timezone = timezone;
        self
    }

    /// Sets the log channel.
    pub fn log_channel_id(mut self, log_channel_id: Option<i64>) -> Self {
        self.log_channel_id = log_channel_id;
        self
    }

    /// Builds and inserts the guild and its singletons.
    ///
    /// # Returns
    /// - `Ok(entity::guild::Model)` - Created guild
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::guild::Model, DbErr> {
        let guild = entity::guild::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
        }
        .insert(self.db)
        .await?;

        entity::guild_configuration::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
            timezone: ActiveValue::Set(self.timezone),
            log_channel_id: ActiveValue::Set(self.log_channel_id),
        }
        .insert(self.db)
        .await?;

        entity::giveaway_manager::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
            channel_id: ActiveValue::Set(None),
        }
        .insert(self.db)
        .await?;

        entity::raffle_manager::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
            channel_id: ActiveValue::Set(None),
        }
        .insert(self.db)
        .await?;

        entity::reaction_role_manager::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
            channel_id: ActiveValue::Set(None),
        }
        .insert(self.db)
        .await?;

        entity::profile_manager::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
        }
        .insert(self.db)
        .await?;

        requirements(self.guild_id)
            .into_active_model()
            .reset_all()
            .insert(self.db)
            .await?;

        Ok(guild)
    }
}

/// Profile requirements with every section optional.
pub fn requirements(guild_id: i64) -> entity::profile_requirements::Model {
    entity::profile_requirements::Model {
        guild_id,
        url: false,
        color: false,
        jobs: false,
        rates: false,
        gender: false,
        race: false,
        orientation: false,
        height: false,
        age: false,
        mare: false,
        world: false,
        likes: false,
        dislikes: false,
        personality: false,
        aboutme: false,
        thumbnail: false,
        main_image: false,
    }
}

/// Creates a guild with default values.
///
/// Shorthand for `GuildFactory::new(db).build().await`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::guild::Model)` - Created guild
/// - `Err(DbErr)` - Database error during insert
pub async fn create_guild(db: &DatabaseConnection) -> Result<entity::guild::Model, DbErr> {
    GuildFactory::new(db).build().await
}
