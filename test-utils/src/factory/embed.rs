//! Embed factory for creating test embeds, their attachments and fields.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test embeds with customizable fields.
///
/// Inserts the embed together with its images, header and footer attachments, the way
/// embed creation provisions them.
///
/// # Example
///
/// ```rust,ignore
/// let embed = EmbedFactory::new(&db, guild.guild_id)
///     .title("Rules")
///     .color(Some(0xff0000))
///     .build()
///     .await?;
/// ```
pub struct EmbedFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: i64,
    title: Option<String>,
    description: Option<String>,
    color: Option<i32>,
}

impl<'a> EmbedFactory<'a> {
    /// Creates a new EmbedFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Embed {id}"` where id is auto-incremented
    /// - description: `"Description {id}"`
    /// - color: None
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entities
    /// - `guild_id` - Guild owning the embed
    ///
    /// # Returns
    /// - `EmbedFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, guild_id: i64) -> Self {
        let id = next_id();
        Self {
            db,
            guild_id,
            title: Some(format!("Embed {}", id)),
            description: Some(format!("Description {}", id)),
            color: None,
        }
    }

    /// Sets the embed title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the embed description.
    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    /// Sets the embed color.
    pub fn color(mut self, color: Option<i32>) -> Self {
        self.color = color;
        self
    }

    /// Builds and inserts the embed and its attachments.
    ///
    /// # Returns
    /// - `Ok(entity::embed::Model)` - Created embed
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::embed::Model, DbErr> {
        let embed = entity::embed::ActiveModel {
            id: ActiveValue::NotSet,
            guild_id: ActiveValue::Set(self.guild_id),
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(self.description),
            color: ActiveValue::Set(self.color),
            url: ActiveValue::Set(None),
            timestamp: ActiveValue::Set(None),
        }
        .insert(self.db)
        .await?;

        entity::embed_images::ActiveModel {
            embed_id: ActiveValue::Set(embed.id),
            thumbnail_url: ActiveValue::Set(None),
            main_image_url: ActiveValue::Set(None),
        }
        .insert(self.db)
        .await?;

        entity::embed_header::ActiveModel {
            embed_id: ActiveValue::Set(embed.id),
            text: ActiveValue::Set(Some("Header".to_string())),
            icon_url: ActiveValue::Set(None),
            url: ActiveValue::Set(None),
        }
        .insert(self.db)
        .await?;

        entity::embed_footer::ActiveModel {
            embed_id: ActiveValue::Set(embed.id),
            text: ActiveValue::Set(Some("Footer".to_string())),
            icon_url: ActiveValue::Set(None),
        }
        .insert(self.db)
        .await?;

        Ok(embed)
    }
}

/// Creates an embed with default values and its attachments.
///
/// Shorthand for `EmbedFactory::new(db, guild_id).build().await`.
pub async fn create_embed(
    db: &DatabaseConnection,
    guild_id: i64,
) -> Result<entity::embed::Model, DbErr> {
    EmbedFactory::new(db, guild_id).build().await
}

/// Creates an embed field at an explicit position.
///
/// # Arguments
/// - `db` - Database connection
/// - `embed_id` - ID of the owning embed
/// - `sort_order` - Position within the embed's fields
///
/// # Returns
/// - `Ok(entity::embed_field::Model)` - Created field
/// - `Err(DbErr)` - Database error during insert
pub async fn create_embed_field(
    db: &DatabaseConnection,
    embed_id: i32,
    sort_order: i32,
) -> Result<entity::embed_field::Model, DbErr> {
    let id = next_id();
    entity::embed_field::ActiveModel {
        id: ActiveValue::NotSet,
        embed_id: ActiveValue::Set(embed_id),
        name: ActiveValue::Set(Some(format!("Field {}", id))),
        value: ActiveValue::Set(Some(format!("Value {}", id))),
        inline: ActiveValue::Set(false),
        sort_order: ActiveValue::Set(sort_order),
    }
    .insert(db)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use crate::factory::guild::create_guild;
    use entity::prelude::*;
    use sea_orm::EntityTrait;

    #[tokio::test]
    async fn creates_embed_with_attachments() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_embed_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let guild = create_guild(db).await?;
        let embed = create_embed(db, guild.guild_id).await?;

        assert_eq!(embed.guild_id, guild.guild_id);
        assert!(EmbedImages::find_by_id(embed.id).one(db).await?.is_some());
        assert!(EmbedHeader::find_by_id(embed.id).one(db).await?.is_some());
        assert!(EmbedFooter::find_by_id(embed.id).one(db).await?.is_some());

        Ok(())
    }

    #[tokio::test]
    async fn rejects_duplicate_field_position() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_embed_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let guild = create_guild(db).await?;
        let embed = create_embed(db, guild.guild_id).await?;
        create_embed_field(db, embed.id, 0).await?;

        let duplicate = create_embed_field(db, embed.id, 0).await;

        assert!(duplicate.is_err());

        Ok(())
    }
}
