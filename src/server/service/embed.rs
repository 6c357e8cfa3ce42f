use sea_orm::DatabaseConnection;

use entity::{embed, embed_field, embed_footer, embed_header, embed_images};

use crate::server::{
    error::AppError,
    model::{context::MutationContext, fields},
    mutation::{patch, verify_scope, Patch, ResourceKind, UnitOfWork},
};

pub struct EmbedService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EmbedService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an embed with empty images, header and footer attachments.
    ///
    /// # Arguments
    /// - `ctx` - Caller scope
    /// - `patch` - Initial values for any of the embed's mutable fields
    ///
    /// # Returns
    /// - `Ok(embed::Model)` - The new embed
    /// - `Err(AppError::NotFound)` - The caller's guild does not exist
    pub async fn create(
        &self,
        ctx: MutationContext,
        patch: Patch,
    ) -> Result<embed::Model, AppError> {
        patch.ensure_only(fields::EMBED)?;

        let mut uow = UnitOfWork::begin(self.db, ctx).await?;
        uow.find::<entity::guild::Model>(ctx.guild_id).await?;

        let draft = patch::apply(
            &embed::Model {
                id: 0,
                guild_id: ctx.guild_id,
                title: None,
                description: None,
                color: None,
                url: None,
                timestamp: None,
            },
            &patch,
        )?;
        let embed = uow.create(draft).await?;

        uow.attach(embed_images::Model {
            embed_id: embed.id,
            thumbnail_url: None,
            main_image_url: None,
        })
        .await?;
        uow.attach(embed_header::Model {
            embed_id: embed.id,
            text: None,
            icon_url: None,
            url: None,
        })
        .await?;
        uow.attach(embed_footer::Model {
            embed_id: embed.id,
            text: None,
            icon_url: None,
        })
        .await?;

        uow.commit().await?;

        Ok(embed)
    }

    /// Applies a patch to an embed.
    pub async fn update(
        &self,
        ctx: MutationContext,
        embed_id: i32,
        patch: Patch,
    ) -> Result<embed::Model, AppError> {
        patch.ensure_only(fields::EMBED)?;

        let mut uow = UnitOfWork::begin(self.db, ctx).await?;
        let embed = load_embed(&uow, embed_id).await?;

        let embed = uow.update(embed, &patch).await?;
        uow.commit().await?;

        Ok(embed)
    }

    pub async fn update_images(
        &self,
        ctx: MutationContext,
        embed_id: i32,
        patch: Patch,
    ) -> Result<embed_images::Model, AppError> {
        patch.ensure_only(fields::EMBED_IMAGES)?;

        let mut uow = UnitOfWork::begin(self.db, ctx).await?;
        let embed = load_embed(&uow, embed_id).await?;

        let images = uow.find::<embed_images::Model>(embed.id.into()).await?;
        verify_scope(ResourceKind::EmbedImages, embed.id, images.embed_id)?;

        let images = uow.update(images, &patch).await?;
        uow.commit().await?;

        Ok(images)
    }

    pub async fn update_header(
        &self,
        ctx: MutationContext,
        embed_id: i32,
        patch: Patch,
    ) -> Result<embed_header::Model, AppError> {
        patch.ensure_only(fields::EMBED_HEADER)?;

        let mut uow = UnitOfWork::begin(self.db, ctx).await?;
        let embed = load_embed(&uow, embed_id).await?;

        let header = uow.find::<embed_header::Model>(embed.id.into()).await?;
        verify_scope(ResourceKind::EmbedHeader, embed.id, header.embed_id)?;

        let header = uow.update(header, &patch).await?;
        uow.commit().await?;

        Ok(header)
    }

    pub async fn update_footer(
        &self,
        ctx: MutationContext,
        embed_id: i32,
        patch: Patch,
    ) -> Result<embed_footer::Model, AppError> {
        patch.ensure_only(fields::EMBED_FOOTER)?;

        let mut uow = UnitOfWork::begin(self.db, ctx).await?;
        let embed = load_embed(&uow, embed_id).await?;

        let footer = uow.find::<embed_footer::Model>(embed.id.into()).await?;
        verify_scope(ResourceKind::EmbedFooter, embed.id, footer.embed_id)?;

        let footer = uow.update(footer, &patch).await?;
        uow.commit().await?;

        Ok(footer)
    }

    /// Deletes an embed with its attachments and fields.
    pub async fn delete(&self, ctx: MutationContext, embed_id: i32) -> Result<u64, AppError> {
        let mut uow = UnitOfWork::begin(self.db, ctx).await?;
        let embed = load_embed(&uow, embed_id).await?;

        let removed = uow.delete(embed).await?;
        uow.commit().await?;

        Ok(removed)
    }

    /// Adds a field to an embed at the lowest free position.
    ///
    /// A `sort_order` in the patch is ignored; creates always take the next position.
    ///
    /// # Arguments
    /// - `ctx` - Caller scope
    /// - `embed_id` - Owning embed
    /// - `patch` - Initial `name`, `value`, `inline`
    ///
    /// # Returns
    /// - `Ok(embed_field::Model)` - The new field
    /// - `Err(AppError::Forbidden)` - Embed belongs to another guild
    pub async fn create_field(
        &self,
        ctx: MutationContext,
        embed_id: i32,
        patch: Patch,
    ) -> Result<embed_field::Model, AppError> {
        patch.ensure_only(fields::EMBED_FIELD)?;

        let mut uow = UnitOfWork::begin(self.db, ctx).await?;
        let embed = load_embed(&uow, embed_id).await?;

        let position = uow
            .next_position::<embed_field::Model>(embed.id.into())
            .await?;
        let mut draft = patch::apply(
            &embed_field::Model {
                id: 0,
                embed_id: embed.id,
                name: None,
                value: None,
                inline: false,
                sort_order: position,
            },
            &patch,
        )?;
        draft.sort_order = position;

        let field = uow.create(draft).await?;
        uow.commit().await?;

        Ok(field)
    }

    /// Applies a patch to an embed field, checking an explicit `sort_order` for collisions.
    ///
    /// # Returns
    /// - `Ok(embed_field::Model)` - Updated field
    /// - `Err(AppError::Forbidden)` - Embed belongs to another guild, or field to another embed
    /// - `Err(AppError::Conflict)` - Another field holds the requested position
    pub async fn update_field(
        &self,
        ctx: MutationContext,
        embed_id: i32,
        field_id: i32,
        patch: Patch,
    ) -> Result<embed_field::Model, AppError> {
        patch.ensure_only(fields::EMBED_FIELD)?;

        let mut uow = UnitOfWork::begin(self.db, ctx).await?;
        let embed = load_embed(&uow, embed_id).await?;
        let field = load_field(&uow, &embed, field_id).await?;

        let field = uow.update_ordered(field, &patch).await?;
        uow.commit().await?;

        Ok(field)
    }

    /// Removes a field; the freed position is taken by the next created field.
    pub async fn delete_field(
        &self,
        ctx: MutationContext,
        embed_id: i32,
        field_id: i32,
    ) -> Result<u64, AppError> {
        let mut uow = UnitOfWork::begin(self.db, ctx).await?;
        let embed = load_embed(&uow, embed_id).await?;
        let field = load_field(&uow, &embed, field_id).await?;

        let removed = uow.delete(field).await?;
        uow.commit().await?;

        Ok(removed)
    }
}

async fn load_embed(uow: &UnitOfWork, embed_id: i32) -> Result<embed::Model, AppError> {
    let embed = uow.find::<embed::Model>(embed_id.into()).await?;
    verify_scope(ResourceKind::Embed, uow.context().guild_id, embed.guild_id)?;

    Ok(embed)
}

async fn load_field(
    uow: &UnitOfWork,
    embed: &embed::Model,
    field_id: i32,
) -> Result<embed_field::Model, AppError> {
    let field = uow.find::<embed_field::Model>(field_id.into()).await?;
    verify_scope(ResourceKind::EmbedField, embed.id, field.embed_id)?;

    Ok(field)
}
