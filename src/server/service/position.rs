use sea_orm::DatabaseConnection;

use entity::position;

use crate::server::{
    error::AppError,
    model::{context::MutationContext, fields},
    mutation::{patch, verify_scope, Patch, ResourceKind, UnitOfWork},
};

pub struct PositionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PositionService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a staffable position in the caller's guild.
    ///
    /// # Arguments
    /// - `ctx` - Caller scope
    /// - `patch` - Initial `name` and `role_id`, both optional
    ///
    /// # Returns
    /// - `Ok(position::Model)` - The new position
    /// - `Err(AppError::NotFound)` - The caller's guild does not exist
    /// - `Err(AppError::Validation)` - Patch names another field
    pub async fn create(
        &self,
        ctx: MutationContext,
        patch: Patch,
    ) -> Result<position::Model, AppError> {
        patch.ensure_only(fields::POSITION)?;

        let mut uow = UnitOfWork::begin(self.db, ctx).await?;
        uow.find::<entity::guild::Model>(ctx.guild_id).await?;

        let draft = patch::apply(
            &position::Model {
                id: 0,
                guild_id: ctx.guild_id,
                name: None,
                role_id: None,
            },
            &patch,
        )?;

        let position = uow.create(draft).await?;
        uow.commit().await?;

        Ok(position)
    }

    pub async fn update(
        &self,
        ctx: MutationContext,
        position_id: i32,
        patch: Patch,
    ) -> Result<position::Model, AppError> {
        patch.ensure_only(fields::POSITION)?;

        let mut uow = UnitOfWork::begin(self.db, ctx).await?;
        let position = load_position(&uow, position_id).await?;

        let position = uow.update(position, &patch).await?;
        uow.commit().await?;

        Ok(position)
    }

    pub async fn delete(&self, ctx: MutationContext, position_id: i32) -> Result<u64, AppError> {
        let mut uow = UnitOfWork::begin(self.db, ctx).await?;
        let position = load_position(&uow, position_id).await?;

        let removed = uow.delete(position).await?;
        uow.commit().await?;

        Ok(removed)
    }
}

async fn load_position(uow: &UnitOfWork, position_id: i32) -> Result<position::Model, AppError> {
    let position = uow.find::<position::Model>(position_id.into()).await?;
    verify_scope(ResourceKind::Position, uow.context().guild_id, position.guild_id)?;

    Ok(position)
}
