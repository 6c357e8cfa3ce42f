use sea_orm_migration::{prelude::*, schema::*};

use super::m20251001_000001_create_guild_tables::Guild;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Embed::Table)
                    .if_not_exists()
                    .col(pk_auto(Embed::Id))
                    .col(big_integer(Embed::GuildId))
                    .col(string_null(Embed::Title))
                    .col(string_null(Embed::Description))
                    .col(integer_null(Embed::Color))
                    .col(string_null(Embed::Url))
                    .col(timestamp_with_time_zone_null(Embed::Timestamp))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_embeds_guild_id")
                            .from(Embed::Table, Embed::GuildId)
                            .to(Guild::Table, Guild::GuildId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(EmbedImages::Table)
                    .if_not_exists()
                    .col(integer(EmbedImages::EmbedId).primary_key())
                    .col(string_null(EmbedImages::ThumbnailUrl))
                    .col(string_null(EmbedImages::MainImageUrl))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_embed_images_embed_id")
                            .from(EmbedImages::Table, EmbedImages::EmbedId)
                            .to(Embed::Table, Embed::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(EmbedHeader::Table)
                    .if_not_exists()
                    .col(integer(EmbedHeader::EmbedId).primary_key())
                    .col(string_null(EmbedHeader::Text))
                    .col(string_null(EmbedHeader::IconUrl))
                    .col(string_null(EmbedHeader::Url))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_embed_headers_embed_id")
                            .from(EmbedHeader::Table, EmbedHeader::EmbedId)
                            .to(Embed::Table, Embed::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(EmbedFooter::Table)
                    .if_not_exists()
                    .col(integer(EmbedFooter::EmbedId).primary_key())
                    .col(string_null(EmbedFooter::Text))
                    .col(string_null(EmbedFooter::IconUrl))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_embed_footers_embed_id")
                            .from(EmbedFooter::Table, EmbedFooter::EmbedId)
                            .to(Embed::Table, Embed::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(EmbedField::Table)
                    .if_not_exists()
                    .col(pk_auto(EmbedField::Id))
                    .col(integer(EmbedField::EmbedId))
                    .col(string_null(EmbedField::Name))
                    .col(string_null(EmbedField::Value))
                    .col(boolean(EmbedField::Inline).default(false))
                    .col(integer(EmbedField::SortOrder))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_embed_fields_embed_id")
                            .from(EmbedField::Table, EmbedField::EmbedId)
                            .to(Embed::Table, Embed::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Backstop for the sibling ordering check
        manager
            .create_index(
                Index::create()
                    .name("uq_embed_fields_embed_id_sort_order")
                    .table(EmbedField::Table)
                    .col(EmbedField::EmbedId)
                    .col(EmbedField::SortOrder)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EmbedField::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(EmbedFooter::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(EmbedHeader::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(EmbedImages::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Embed::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Embed {
    #[sea_orm(iden = "embeds")]
    Table,
    Id,
    GuildId,
    Title,
    Description,
    Color,
    Url,
    Timestamp,
}

#[derive(DeriveIden)]
pub enum EmbedImages {
    #[sea_orm(iden = "embed_images")]
    Table,
    EmbedId,
    ThumbnailUrl,
    MainImageUrl,
}

#[derive(DeriveIden)]
pub enum EmbedHeader {
    #[sea_orm(iden = "embed_headers")]
    Table,
    EmbedId,
    Text,
    IconUrl,
    Url,
}

#[derive(DeriveIden)]
pub enum EmbedFooter {
    #[sea_orm(iden = "embed_footers")]
    Table,
    EmbedId,
    Text,
    IconUrl,
}

#[derive(DeriveIden)]
pub enum EmbedField {
    #[sea_orm(iden = "embed_fields")]
    Table,
    Id,
    EmbedId,
    Name,
    Value,
    Inline,
    SortOrder,
}
