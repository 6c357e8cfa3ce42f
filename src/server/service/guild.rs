use sea_orm::DatabaseConnection;

use entity::{
    giveaway_manager, guild, guild_configuration, profile_manager, profile_requirements,
    raffle_manager, reaction_role_manager,
};

use crate::server::{
    error::AppError,
    model::{context::MutationContext, fields},
    mutation::{resource::find_by_key, verify_scope, Patch, ResourceKind, UnitOfWork},
};

/// UTC offset new guilds start with.
const DEFAULT_TIMEZONE: i32 = 7;

pub struct GuildService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GuildService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates the tenant root for `ctx.guild_id`.
    ///
    /// Provisions the guild configuration, the giveaway, raffle, reaction-role and
    /// profile managers, and profile requirements in the same unit of work. Audited as a
    /// single `Guild` Create.
    ///
    /// # Returns
    /// - `Ok(guild::Model)` - The new guild
    /// - `Err(AppError::Conflict)` - The guild already exists
    pub async fn create(&self, ctx: MutationContext) -> Result<guild::Model, AppError> {
        let mut uow = UnitOfWork::begin(self.db, ctx).await?;

        if find_by_key::<guild::Model, _>(uow.conn(), ctx.guild_id)
            .await?
            .is_some()
        {
            return Err(AppError::Conflict(format!(
                "Guild {} already exists",
                ctx.guild_id
            )));
        }

        let guild = uow
            .create(guild::Model {
                guild_id: ctx.guild_id,
            })
            .await?;

        uow.attach(guild_configuration::Model {
            guild_id: ctx.guild_id,
            timezone: DEFAULT_TIMEZONE,
            log_channel_id: None,
        })
        .await?;
        uow.attach(giveaway_manager::Model {
            guild_id: ctx.guild_id,
            channel_id: None,
        })
        .await?;
        uow.attach(raffle_manager::Model {
            guild_id: ctx.guild_id,
            channel_id: None,
        })
        .await?;
        uow.attach(reaction_role_manager::Model {
            guild_id: ctx.guild_id,
            channel_id: None,
        })
        .await?;
        uow.attach(profile_manager::Model {
            guild_id: ctx.guild_id,
        })
        .await?;
        uow.attach(optional_requirements(ctx.guild_id)).await?;

        uow.commit().await?;

        tracing::info!(guild_id = ctx.guild_id, actor_id = ctx.actor_id, "Created guild");

        Ok(guild)
    }

    /// Applies a patch to the guild configuration.
    ///
    /// # Arguments
    /// - `ctx` - Caller scope
    /// - `patch` - Any of `timezone`, `log_channel_id`
    ///
    /// # Returns
    /// - `Ok(guild_configuration::Model)` - Updated configuration
    /// - `Err(AppError::NotFound)` - The guild has no configuration
    /// - `Err(AppError::Validation)` - Patch names another field
    pub async fn update_configuration(
        &self,
        ctx: MutationContext,
        patch: Patch,
    ) -> Result<guild_configuration::Model, AppError> {
        patch.ensure_only(fields::GUILD_CONFIGURATION)?;

        let mut uow = UnitOfWork::begin(self.db, ctx).await?;

        let config = uow.find::<guild_configuration::Model>(ctx.guild_id).await?;
        verify_scope(ResourceKind::GuildConfiguration, ctx.guild_id, config.guild_id)?;

        let config = uow.update(config, &patch).await?;
        uow.commit().await?;

        Ok(config)
    }

    /// Deletes the guild and every resource of every family beneath it.
    ///
    /// Audit entries of the guild are kept.
    ///
    /// # Returns
    /// - `Ok(u64)` - Rows removed, guild included
    /// - `Err(AppError::NotFound)` - The guild does not exist
    pub async fn delete(&self, ctx: MutationContext) -> Result<u64, AppError> {
        let mut uow = UnitOfWork::begin(self.db, ctx).await?;

        let guild = uow.find::<guild::Model>(ctx.guild_id).await?;
        verify_scope(ResourceKind::Guild, ctx.guild_id, guild.guild_id)?;

        let removed = uow.delete(guild).await?;
        uow.commit().await?;

        tracing::info!(
            guild_id = ctx.guild_id,
            actor_id = ctx.actor_id,
            rows = removed,
            "Deleted guild"
        );

        Ok(removed)
    }
}

/// Profile requirements with every section optional.
fn optional_requirements(guild_id: i64) -> profile_requirements::Model {
    profile_requirements::Model {
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
