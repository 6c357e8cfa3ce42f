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
                    .table(GlyphMessage::Table)
                    .if_not_exists()
                    .col(pk_auto(GlyphMessage::Id))
                    .col(big_integer(GlyphMessage::GuildId))
                    .col(string_null(GlyphMessage::Name))
                    .col(json_null(GlyphMessage::Message))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_glyph_messages_guild_id")
                            .from(GlyphMessage::Table, GlyphMessage::GuildId)
                            .to(Guild::Table, Guild::GuildId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GlyphMessage::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GlyphMessage {
    #[sea_orm(iden = "glyph_messages")]
    Table,
    Id,
    GuildId,
    Name,
    Message,
}
