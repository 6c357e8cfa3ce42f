use chrono::Utc;
use sea_orm::DatabaseConnection;
use serde_json::json;

use entity::{giveaway, giveaway_details, giveaway_entry, giveaway_manager};

use crate::server::{
    error::AppError,
    model::{context::MutationContext, fields},
    mutation::{patch, resource::find_owned_by, verify_scope, Patch, ResourceKind, UnitOfWork},
};

pub struct GiveawayService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GiveawayService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn update_manager(
        &self,
        ctx: MutationContext,
        patch: Patch,
    ) -> Result<giveaway_manager::Model, AppError> {
        patch.ensure_only(fields::GIVEAWAY_MANAGER)?;

        let mut uow = UnitOfWork::begin(self.db, ctx).await?;
        let manager = load_manager(&uow).await?;

        let manager = uow.update(manager, &patch).await?;
        uow.commit().await?;

        Ok(manager)
    }

    /// Creates a giveaway under the guild's giveaway manager together with its details.
    ///
    /// # Arguments
    /// - `ctx` - Caller scope
    /// - `patch` - Initial giveaway fields
    /// - `details` - Initial details fields such as `name`, `prize`, `num_winners`
    ///
    /// # Returns
    /// - `Ok((giveaway::Model, giveaway_details::Model))` - The new giveaway and details
    /// - `Err(AppError::NotFound)` - The guild has no giveaway manager
    /// - `Err(AppError::Validation)` - Either patch names an unknown field
    pub async fn create(
        &self,
        ctx: MutationContext,
        patch: Patch,
        details: Patch,
    ) -> Result<(giveaway::Model, giveaway_details::Model), AppError> {
        patch.ensure_only(fields::GIVEAWAY)?;
        details.ensure_only(fields::GIVEAWAY_DETAILS)?;

        let mut uow = UnitOfWork::begin(self.db, ctx).await?;
        let manager = load_manager(&uow).await?;

        let draft = patch::apply(
            &giveaway::Model {
                id: 0,
                guild_id: manager.guild_id,
                winners: json!([]),
                post_url: None,
                rolled_at: None,
                rolled_by: None,
            },
            &patch,
        )?;
        let giveaway = uow.create(draft).await?;

        let draft = patch::apply(
            &giveaway_details::Model {
                giveaway_id: giveaway.id,
                name: None,
                prize: None,
                num_winners: 1,
                auto_notify: true,
                description: None,
                thumbnail_url: None,
                color: None,
                end_dt: None,
                emoji: None,
            },
            &details,
        )?;
        let details = uow.attach(draft).await?;

        uow.commit().await?;

        Ok((giveaway, details))
    }

    pub async fn update(
        &self,
        ctx: MutationContext,
        giveaway_id: i32,
        patch: Patch,
    ) -> Result<giveaway::Model, AppError> {
        patch.ensure_only(fields::GIVEAWAY)?;

        let mut uow = UnitOfWork::begin(self.db, ctx).await?;
        let manager = load_manager(&uow).await?;
        let giveaway = load_giveaway(&uow, &manager, giveaway_id).await?;

        let giveaway = uow.update(giveaway, &patch).await?;
        uow.commit().await?;

        Ok(giveaway)
    }

    pub async fn update_details(
        &self,
        ctx: MutationContext,
        giveaway_id: i32,
        patch: Patch,
    ) -> Result<giveaway_details::Model, AppError> {
        patch.ensure_only(fields::GIVEAWAY_DETAILS)?;

        let mut uow = UnitOfWork::begin(self.db, ctx).await?;
        let manager = load_manager(&uow).await?;
        let giveaway = load_giveaway(&uow, &manager, giveaway_id).await?;

        let details = uow
            .find::<giveaway_details::Model>(giveaway.id.into())
            .await?;
        verify_scope(ResourceKind::GiveawayDetails, giveaway.id, details.giveaway_id)?;

        let details = uow.update(details, &patch).await?;
        uow.commit().await?;

        Ok(details)
    }

    /// Deletes a giveaway with its details and entries.
    pub async fn delete(&self, ctx: MutationContext, giveaway_id: i32) -> Result<u64, AppError> {
        let mut uow = UnitOfWork::begin(self.db, ctx).await?;
        let manager = load_manager(&uow).await?;
        let giveaway = load_giveaway(&uow, &manager, giveaway_id).await?;

        let removed = uow.delete(giveaway).await?;
        uow.commit().await?;

        Ok(removed)
    }

    /// Enters the acting user into a giveaway.
    ///
    /// # Returns
    /// - `Ok(giveaway_entry::Model)` - The new entry
    /// - `Err(AppError::Conflict)` - The user has already entered this giveaway
    pub async fn add_entry(
        &self,
        ctx: MutationContext,
        giveaway_id: i32,
    ) -> Result<giveaway_entry::Model, AppError> {
        let mut uow = UnitOfWork::begin(self.db, ctx).await?;
        let manager = load_manager(&uow).await?;
        let giveaway = load_giveaway(&uow, &manager, giveaway_id).await?;

        let entries = find_owned_by::<giveaway_entry::Model, _>(
            uow.conn(),
            giveaway_entry::Column::GiveawayId,
            &[giveaway.id.into()],
        )
        .await?;
        if entries.iter().any(|entry| entry.user_id == ctx.actor_id) {
            return Err(AppError::Conflict(format!(
                "User {} has already entered giveaway {}",
                ctx.actor_id, giveaway.id
            )));
        }

        let entry = uow
            .create(giveaway_entry::Model {
                id: 0,
                giveaway_id: giveaway.id,
                user_id: ctx.actor_id,
                timestamp: Utc::now(),
            })
            .await?;
        uow.commit().await?;

        Ok(entry)
    }

    pub async fn delete_entry(
        &self,
        ctx: MutationContext,
        giveaway_id: i32,
        entry_id: i32,
    ) -> Result<u64, AppError> {
        let mut uow = UnitOfWork::begin(self.db, ctx).await?;
        let manager = load_manager(&uow).await?;
        let giveaway = load_giveaway(&uow, &manager, giveaway_id).await?;

        let entry = uow.find::<giveaway_entry::Model>(entry_id.into()).await?;
        verify_scope(ResourceKind::GiveawayEntry, giveaway.id, entry.giveaway_id)?;

        let removed = uow.delete(entry).await?;
        uow.commit().await?;

        Ok(removed)
    }
}

async fn load_manager(uow: &UnitOfWork) -> Result<giveaway_manager::Model, AppError> {
    let guild_id = uow.context().guild_id;
    let manager = uow.find::<giveaway_manager::Model>(guild_id).await?;
    verify_scope(ResourceKind::GiveawayManager, guild_id, manager.guild_id)?;

    Ok(manager)
}

async fn load_giveaway(
    uow: &UnitOfWork,
    manager: &giveaway_manager::Model,
    giveaway_id: i32,
) -> Result<giveaway::Model, AppError> {
    let giveaway = uow.find::<giveaway::Model>(giveaway_id.into()).await?;
    verify_scope(ResourceKind::Giveaway, manager.guild_id, giveaway.guild_id)?;

    Ok(giveaway)
}
