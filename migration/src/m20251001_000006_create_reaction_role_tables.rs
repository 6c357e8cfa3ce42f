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
                    .table(ReactionRoleManager::Table)
                    .if_not_exists()
                    .col(big_integer(ReactionRoleManager::GuildId).primary_key())
                    .col(big_integer_null(ReactionRoleManager::ChannelId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reaction_role_managers_guild_id")
                            .from(ReactionRoleManager::Table, ReactionRoleManager::GuildId)
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
                    .table(ReactionRoleMessage::Table)
                    .if_not_exists()
                    .col(pk_auto(ReactionRoleMessage::Id))
                    .col(big_integer(ReactionRoleMessage::GuildId))
                    .col(string_null(ReactionRoleMessage::Title))
                    .col(string_null(ReactionRoleMessage::Description))
                    .col(string_null(ReactionRoleMessage::ThumbnailUrl))
                    .col(string_null(ReactionRoleMessage::PostUrl))
                    .col(integer(ReactionRoleMessage::MsgType).default(1))
                    .col(integer_null(ReactionRoleMessage::TypeParam))
                    .col(integer_null(ReactionRoleMessage::Color))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reaction_role_messages_guild_id")
                            .from(ReactionRoleMessage::Table, ReactionRoleMessage::GuildId)
                            .to(ReactionRoleManager::Table, ReactionRoleManager::GuildId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ReactionRole::Table)
                    .if_not_exists()
                    .col(pk_auto(ReactionRole::Id))
                    .col(integer(ReactionRole::MessageId))
                    .col(big_integer_null(ReactionRole::RoleId))
                    .col(string_null(ReactionRole::Emoji))
                    .col(string_null(ReactionRole::Label))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reaction_roles_message_id")
                            .from(ReactionRole::Table, ReactionRole::MessageId)
                            .to(ReactionRoleMessage::Table, ReactionRoleMessage::Id)
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
            .drop_table(Table::drop().table(ReactionRole::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ReactionRoleMessage::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ReactionRoleManager::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum ReactionRoleManager {
    #[sea_orm(iden = "reaction_role_managers")]
    Table,
    GuildId,
    ChannelId,
}

#[derive(DeriveIden)]
pub enum ReactionRoleMessage {
    #[sea_orm(iden = "reaction_role_messages")]
    Table,
    Id,
    GuildId,
    Title,
    Description,
    ThumbnailUrl,
    PostUrl,
    MsgType,
    TypeParam,
    Color,
}

#[derive(DeriveIden)]
pub enum ReactionRole {
    #[sea_orm(iden = "reaction_roles")]
    Table,
    Id,
    MessageId,
    RoleId,
    Emoji,
    Label,
}
