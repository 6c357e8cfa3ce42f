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
                    .table(GiveawayManager::Table)
                    .if_not_exists()
                    .col(big_integer(GiveawayManager::GuildId).primary_key())
                    .col(big_integer_null(GiveawayManager::ChannelId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_giveaway_managers_guild_id")
                            .from(GiveawayManager::Table, GiveawayManager::GuildId)
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
                    .table(Giveaway::Table)
                    .if_not_exists()
                    .col(pk_auto(Giveaway::Id))
                    .col(big_integer(Giveaway::GuildId))
                    .col(json(Giveaway::Winners))
                    .col(string_null(Giveaway::PostUrl))
                    .col(timestamp_with_time_zone_null(Giveaway::RolledAt))
                    .col(big_integer_null(Giveaway::RolledBy))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_giveaways_guild_id")
                            .from(Giveaway::Table, Giveaway::GuildId)
                            .to(GiveawayManager::Table, GiveawayManager::GuildId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(GiveawayDetails::Table)
                    .if_not_exists()
                    .col(integer(GiveawayDetails::GiveawayId).primary_key())
                    .col(string_null(GiveawayDetails::Name))
                    .col(string_null(GiveawayDetails::Prize))
                    .col(integer(GiveawayDetails::NumWinners).default(1))
                    .col(boolean(GiveawayDetails::AutoNotify).default(true))
                    .col(string_null(GiveawayDetails::Description))
                    .col(string_null(GiveawayDetails::ThumbnailUrl))
                    .col(integer_null(GiveawayDetails::Color))
                    .col(timestamp_with_time_zone_null(GiveawayDetails::EndDt))
                    .col(string_null(GiveawayDetails::Emoji))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_giveaway_details_giveaway_id")
                            .from(GiveawayDetails::Table, GiveawayDetails::GiveawayId)
                            .to(Giveaway::Table, Giveaway::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(GiveawayEntry::Table)
                    .if_not_exists()
                    .col(pk_auto(GiveawayEntry::Id))
                    .col(integer(GiveawayEntry::GiveawayId))
                    .col(big_integer(GiveawayEntry::UserId))
                    .col(timestamp_with_time_zone(GiveawayEntry::Timestamp).default(Expr::current_timestamp()))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_giveaway_entries_giveaway_id")
                            .from(GiveawayEntry::Table, GiveawayEntry::GiveawayId)
                            .to(Giveaway::Table, Giveaway::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One entry per user per giveaway
        manager
            .create_index(
                Index::create()
                    .name("uq_giveaway_entries_giveaway_id_user_id")
                    .table(GiveawayEntry::Table)
                    .col(GiveawayEntry::GiveawayId)
                    .col(GiveawayEntry::UserId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GiveawayEntry::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(GiveawayDetails::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Giveaway::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(GiveawayManager::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum GiveawayManager {
    #[sea_orm(iden = "giveaway_managers")]
    Table,
    GuildId,
    ChannelId,
}

#[derive(DeriveIden)]
pub enum Giveaway {
    #[sea_orm(iden = "giveaways")]
    Table,
    Id,
    GuildId,
    Winners,
    PostUrl,
    RolledAt,
    RolledBy,
}

#[derive(DeriveIden)]
pub enum GiveawayDetails {
    #[sea_orm(iden = "giveaway_details")]
    Table,
    GiveawayId,
    Name,
    Prize,
    NumWinners,
    AutoNotify,
    Description,
    ThumbnailUrl,
    Color,
    EndDt,
    Emoji,
}

#[derive(DeriveIden)]
pub enum GiveawayEntry {
    #[sea_orm(iden = "giveaway_entries")]
    Table,
    Id,
    GiveawayId,
    UserId,
    Timestamp,
}
