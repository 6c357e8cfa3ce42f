use sea_orm::DatabaseConnection;
use serde_json::json;

use entity::{raffle, raffle_entry, raffle_manager};

use crate::server::{
    error::AppError,
    model::{context::MutationContext, fields},
    mutation::{patch, verify_scope, Patch, ResourceKind, UnitOfWork},
};

/// Ticket price of new raffles.
const DEFAULT_COST: i32 = 100_000;

pub struct RaffleService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RaffleService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn update_manager(
        &self,
        ctx: MutationContext,
        patch: Patch,
    ) -> Result<raffle_manager::Model, AppError> {
        patch.ensure_only(fields::RAFFLE_MANAGER)?;

        let mut uow = UnitOfWork::begin(self.db, ctx).await?;
        let manager = load_manager(&uow).await?;

        let manager = uow.update(manager, &patch).await?;
        uow.commit().await?;

        Ok(manager)
    }

    /// Creates a raffle under the guild's raffle manager.
    ///
    /// # Returns
    /// - `Ok(raffle::Model)` - The new raffle
    /// - `Err(AppError::NotFound)` - The guild has no raffle manager
    pub async fn create(
        &self,
        ctx: MutationContext,
        patch: Patch,
    ) -> Result<raffle::Model, AppError> {
        patch.ensure_only(fields::RAFFLE)?;

        let mut uow = UnitOfWork::begin(self.db, ctx).await?;
        let manager = load_manager(&uow).await?;

        let draft = patch::apply(
            &raffle::Model {
                id: 0,
                guild_id: manager.guild_id,
                winners: json!([]),
                is_active: false,
                post_url: None,
                name: None,
                prize: None,
                num_winners: 1,
                auto_notify: true,
                cost: DEFAULT_COST,
                rolled_at: None,
                rolled_by: None,
            },
            &patch,
        )?;

        let raffle = uow.create(draft).await?;
        uow.commit().await?;

        Ok(raffle)
    }

    pub async fn update(
        &self,
        ctx: MutationContext,
        raffle_id: i32,
        patch: Patch,
    ) -> Result<raffle::Model, AppError> {
        patch.ensure_only(fields::RAFFLE)?;

        let mut uow = UnitOfWork::begin(self.db, ctx).await?;
        let manager = load_manager(&uow).await?;
        let raffle = load_raffle(&uow, &manager, raffle_id).await?;

        let raffle = uow.update(raffle, &patch).await?;
        uow.commit().await?;

        Ok(raffle)
    }

    /// Deletes a raffle with its entries.
    ///
    /// # Returns
    /// - `Ok(u64)` - Rows removed, raffle included
    /// - `Err(AppError::Forbidden)` - Raffle belongs to another guild
    pub async fn delete(&self, ctx: MutationContext, raffle_id: i32) -> Result<u64, AppError> {
        let mut uow = UnitOfWork::begin(self.db, ctx).await?;
        let manager = load_manager(&uow).await?;
        let raffle = load_raffle(&uow, &manager, raffle_id).await?;

        let removed = uow.delete(raffle).await?;
        uow.commit().await?;

        Ok(removed)
    }

    /// Buys tickets in a raffle for the acting user.
    ///
    /// # Arguments
    /// - `ctx` - Caller scope; `ctx.actor_id` becomes the entrant
    /// - `raffle_id` - Raffle entered
    /// - `patch` - Optional `quantity`, one ticket when absent
    pub async fn create_entry(
        &self,
        ctx: MutationContext,
        raffle_id: i32,
        patch: Patch,
    ) -> Result<raffle_entry::Model, AppError> {
        patch.ensure_only(fields::RAFFLE_ENTRY)?;

        let mut uow = UnitOfWork::begin(self.db, ctx).await?;
        let manager = load_manager(&uow).await?;
        let raffle = load_raffle(&uow, &manager, raffle_id).await?;

        let draft = patch::apply(
            &raffle_entry::Model {
                id: 0,
                raffle_id: raffle.id,
                user_id: ctx.actor_id,
                quantity: 1,
            },
            &patch,
        )?;
        ensure_positive_quantity(draft.quantity)?;

        let entry = uow.create(draft).await?;
        uow.commit().await?;

        Ok(entry)
    }

    pub async fn update_entry(
        &self,
        ctx: MutationContext,
        raffle_id: i32,
        entry_id: i32,
        patch: Patch,
    ) -> Result<raffle_entry::Model, AppError> {
        patch.ensure_only(fields::RAFFLE_ENTRY)?;
        if let Some(quantity) = patch.get_i32("quantity")? {
            ensure_positive_quantity(quantity)?;
        }

        let mut uow = UnitOfWork::begin(self.db, ctx).await?;
        let manager = load_manager(&uow).await?;
        let raffle = load_raffle(&uow, &manager, raffle_id).await?;
        let entry = load_entry(&uow, &raffle, entry_id).await?;

        let entry = uow.update(entry, &patch).await?;
        uow.commit().await?;

        Ok(entry)
    }

    pub async fn delete_entry(
        &self,
        ctx: MutationContext,
        raffle_id: i32,
        entry_id: i32,
    ) -> Result<u64, AppError> {
        let mut uow = UnitOfWork::begin(self.db, ctx).await?;
        let manager = load_manager(&uow).await?;
        let raffle = load_raffle(&uow, &manager, raffle_id).await?;
        let entry = load_entry(&uow, &raffle, entry_id).await?;

        let removed = uow.delete(entry).await?;
        uow.commit().await?;

        Ok(removed)
    }
}

fn ensure_positive_quantity(quantity: i32) -> Result<(), AppError> {
    if quantity < 1 {
        return Err(AppError::Validation(format!(
            "Ticket quantity must be at least 1, got {}",
            quantity
        )));
    }

    Ok(())
}

async fn load_manager(uow: &UnitOfWork) -> Result<raffle_manager::Model, AppError> {
    let guild_id = uow.context().guild_id;
    let manager = uow.find::<raffle_manager::Model>(guild_id).await?;
    verify_scope(ResourceKind::RaffleManager, guild_id, manager.guild_id)?;

    Ok(manager)
}

async fn load_raffle(
    uow: &UnitOfWork,
    manager: &raffle_manager::Model,
    raffle_id: i32,
) -> Result<raffle::Model, AppError> {
    let raffle = uow.find::<raffle::Model>(raffle_id.into()).await?;
    verify_scope(ResourceKind::Raffle, manager.guild_id, raffle.guild_id)?;

    Ok(raffle)
}

async fn load_entry(
    uow: &UnitOfWork,
    raffle: &raffle::Model,
    entry_id: i32,
) -> Result<raffle_entry::Model, AppError> {
    let entry = uow.find::<raffle_entry::Model>(entry_id.into()).await?;
    verify_scope(ResourceKind::RaffleEntry, raffle.id, entry.raffle_id)?;

    Ok(entry)
}
