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
                    .table(RaffleManager::Table)
                    .if_not_exists()
                    .col(big_integer(RaffleManager::GuildId).primary_key())
                    .col(big_integer_null(RaffleManager::ChannelId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_raffle_managers_guild_id")
                            .from(RaffleManager::Table, RaffleManager::GuildId)
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
                    .table(Raffle::Table)
                    .if_not_exists()
                    .col(pk_auto(Raffle::Id))
                    .col(big_integer(Raffle::GuildId))
                    .col(json(Raffle::Winners))
                    .col(boolean(Raffle::IsActive).default(false))
                    .col(string_null(Raffle::PostUrl))
                    .col(string_null(Raffle::Name))
                    .col(string_null(Raffle::Prize))
                    .col(integer(Raffle::NumWinners).default(1))
                    .col(boolean(Raffle::AutoNotify).default(true))
                    .col(integer(Raffle::Cost).default(100000))
                    .col(timestamp_with_time_zone_null(Raffle::RolledAt))
                    .col(big_integer_null(Raffle::RolledBy))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_raffles_guild_id")
                            .from(Raffle::Table, Raffle::GuildId)
                            .to(RaffleManager::Table, RaffleManager::GuildId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(RaffleEntry::Table)
                    .if_not_exists()
                    .col(pk_auto(RaffleEntry::Id))
                    .col(integer(RaffleEntry::RaffleId))
                    .col(big_integer(RaffleEntry::UserId))
                    .col(integer(RaffleEntry::Quantity).default(1))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_raffle_entries_raffle_id")
                            .from(RaffleEntry::Table, RaffleEntry::RaffleId)
                            .to(Raffle::Table, Raffle::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RaffleEntry::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Raffle::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(RaffleManager::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum RaffleManager {
    #[sea_orm(iden = "raffle_managers")]
    Table,
    GuildId,
    ChannelId,
}

#[derive(DeriveIden)]
pub enum Raffle {
    #[sea_orm(iden = "raffles")]
    Table,
    Id,
    GuildId,
    Winners,
    IsActive,
    PostUrl,
    Name,
    Prize,
    NumWinners,
    AutoNotify,
    Cost,
    RolledAt,
    RolledBy,
}

#[derive(DeriveIden)]
pub enum RaffleEntry {
    #[sea_orm(iden = "raffle_entries")]
    Table,
    Id,
    RaffleId,
    UserId,
    Quantity,
}
