use sea_orm::DatabaseConnection;

use entity::glyph_message;

use crate::server::{
    error::AppError,
    model::{context::MutationContext, fields},
    mutation::{patch, verify_scope, Patch, ResourceKind, UnitOfWork},
};

/// Party-finder glyph messages a guild has customized.
pub struct GlyphMessageService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GlyphMessageService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        ctx: MutationContext,
        patch: Patch,
    ) -> Result<glyph_message::Model, AppError> {
        patch.ensure_only(fields::GLYPH_MESSAGE)?;

        let mut uow = UnitOfWork::begin(self.db, ctx).await?;
        uow.find::<entity::guild::Model>(ctx.guild_id).await?;

        let draft = patch::apply(
            &glyph_message::Model {
                id: 0,
                guild_id: ctx.guild_id,
                name: None,
                message: None,
            },
            &patch,
        )?;

        let message = uow.create(draft).await?;
        uow.commit().await?;

        Ok(message)
    }

    /// Applies a patch to a glyph message.
    ///
    /// `message` is replaced as a whole; its content is not merged.
    pub async fn update(
        &self,
        ctx: MutationContext,
        message_id: i32,
        patch: Patch,
    ) -> Result<glyph_message::Model, AppError> {
        patch.ensure_only(fields::GLYPH_MESSAGE)?;

        let mut uow = UnitOfWork::begin(self.db, ctx).await?;
        let message = load_message(&uow, message_id).await?;

        let message = uow.update(message, &patch).await?;
        uow.commit().await?;

        Ok(message)
    }

    pub async fn delete(&self, ctx: MutationContext, message_id: i32) -> Result<u64, AppError> {
        let mut uow = UnitOfWork::begin(self.db, ctx).await?;
        let message = load_message(&uow, message_id).await?;

        let removed = uow.delete(message).await?;
        uow.commit().await?;

        Ok(removed)
    }
}

async fn load_message(
    uow: &UnitOfWork,
    message_id: i32,
) -> Result<glyph_message::Model, AppError> {
    let message = uow.find::<glyph_message::Model>(message_id.into()).await?;
    verify_scope(ResourceKind::GlyphMessage, uow.context().guild_id, message.guild_id)?;

    Ok(message)
}
