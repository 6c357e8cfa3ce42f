use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Guild::Table)
                    .if_not_exists()
                    .col(big_integer(Guild::GuildId).primary_key())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(GuildConfiguration::Table)
                    .if_not_exists()
                    .col(big_integer(GuildConfiguration::GuildId).primary_key())
                    .col(integer(GuildConfiguration::Timezone).default(7))
                    .col(big_integer_null(GuildConfiguration::LogChannelId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_guild_configurations_guild_id")
                            .from(GuildConfiguration::Table, GuildConfiguration::GuildId)
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
                    .table(AuditLog::Table)
                    .if_not_exists()
                    .col(pk_auto(AuditLog::Id))
                    .col(big_integer(AuditLog::GuildId))
                    .col(string(AuditLog::Target))
                    .col(big_integer(AuditLog::TargetId))
                    .col(string(AuditLog::Action))
                    .col(big_integer(AuditLog::UserId))
                    .col(json(AuditLog::Changes))
                    .col(timestamp_with_time_zone(AuditLog::CreatedAt).default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AuditLog::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(GuildConfiguration::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Guild::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Guild {
    #[sea_orm(iden = "guild_ids")]
    Table,
    GuildId,
}

#[derive(DeriveIden)]
pub enum GuildConfiguration {
    #[sea_orm(iden = "guild_configurations")]
    Table,
    GuildId,
    Timezone,
    LogChannelId,
}

#[derive(DeriveIden)]
pub enum AuditLog {
    #[sea_orm(iden = "audit_log")]
    Table,
    Id,
    GuildId,
    Target,
    TargetId,
    Action,
    UserId,
    Changes,
    CreatedAt,
}
