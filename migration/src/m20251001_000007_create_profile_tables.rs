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
                    .table(ProfileManager::Table)
                    .if_not_exists()
                    .col(big_integer(ProfileManager::GuildId).primary_key())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_profile_managers_guild_id")
                            .from(ProfileManager::Table, ProfileManager::GuildId)
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
                    .table(ProfileRequirements::Table)
                    .if_not_exists()
                    .col(big_integer(ProfileRequirements::GuildId).primary_key())
                    .col(boolean(ProfileRequirements::Url).default(false))
                    .col(boolean(ProfileRequirements::Color).default(false))
                    .col(boolean(ProfileRequirements::Jobs).default(false))
                    .col(boolean(ProfileRequirements::Rates).default(false))
                    .col(boolean(ProfileRequirements::Gender).default(false))
                    .col(boolean(ProfileRequirements::Race).default(false))
                    .col(boolean(ProfileRequirements::Orientation).default(false))
                    .col(boolean(ProfileRequirements::Height).default(false))
                    .col(boolean(ProfileRequirements::Age).default(false))
                    .col(boolean(ProfileRequirements::Mare).default(false))
                    .col(boolean(ProfileRequirements::World).default(false))
                    .col(boolean(ProfileRequirements::Likes).default(false))
                    .col(boolean(ProfileRequirements::Dislikes).default(false))
                    .col(boolean(ProfileRequirements::Personality).default(false))
                    .col(boolean(ProfileRequirements::Aboutme).default(false))
                    .col(boolean(ProfileRequirements::Thumbnail).default(false))
                    .col(boolean(ProfileRequirements::MainImage).default(false))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_profile_requirements_guild_id")
                            .from(ProfileRequirements::Table, ProfileRequirements::GuildId)
                            .to(ProfileManager::Table, ProfileManager::GuildId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Profile::Table)
                    .if_not_exists()
                    .col(pk_auto(Profile::Id))
                    .col(big_integer(Profile::UserId))
                    .col(big_integer(Profile::GuildId))
                    .col(string_null(Profile::PostUrl))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_profiles_guild_id")
                            .from(Profile::Table, Profile::GuildId)
                            .to(ProfileManager::Table, ProfileManager::GuildId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ProfileImages::Table)
                    .if_not_exists()
                    .col(integer(ProfileImages::ProfileId).primary_key())
                    .col(string_null(ProfileImages::ThumbnailUrl))
                    .col(string_null(ProfileImages::MainImageUrl))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_profile_images_profile_id")
                            .from(ProfileImages::Table, ProfileImages::ProfileId)
                            .to(Profile::Table, Profile::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ProfileAtAGlance::Table)
                    .if_not_exists()
                    .col(integer(ProfileAtAGlance::ProfileId).primary_key())
                    .col(integer_null(ProfileAtAGlance::World))
                    .col(integer_null(ProfileAtAGlance::GenderEnum))
                    .col(json(ProfileAtAGlance::Pronouns))
                    .col(integer_null(ProfileAtAGlance::RaceEnum))
                    .col(integer_null(ProfileAtAGlance::ClanEnum))
                    .col(integer_null(ProfileAtAGlance::OrientationEnum))
                    .col(string_null(ProfileAtAGlance::RaceCustom))
                    .col(string_null(ProfileAtAGlance::ClanCustom))
                    .col(string_null(ProfileAtAGlance::OrientationCustom))
                    .col(integer_null(ProfileAtAGlance::Height))
                    .col(string_null(ProfileAtAGlance::Age))
                    .col(string_null(ProfileAtAGlance::Mare))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_profile_at_a_glances_profile_id")
                            .from(ProfileAtAGlance::Table, ProfileAtAGlance::ProfileId)
                            .to(Profile::Table, Profile::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ProfilePersonality::Table)
                    .if_not_exists()
                    .col(integer(ProfilePersonality::ProfileId).primary_key())
                    .col(json_null(ProfilePersonality::Likes))
                    .col(json_null(ProfilePersonality::Dislikes))
                    .col(string_null(ProfilePersonality::Personality))
                    .col(string_null(ProfilePersonality::Aboutme))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_profile_personalities_profile_id")
                            .from(ProfilePersonality::Table, ProfilePersonality::ProfileId)
                            .to(Profile::Table, Profile::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ProfileDetails::Table)
                    .if_not_exists()
                    .col(integer(ProfileDetails::ProfileId).primary_key())
                    .col(string_null(ProfileDetails::Name))
                    .col(string_null(ProfileDetails::CustomUrl))
                    .col(integer_null(ProfileDetails::Color))
                    .col(json(ProfileDetails::Jobs))
                    .col(string_null(ProfileDetails::Rates))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_profile_details_profile_id")
                            .from(ProfileDetails::Table, ProfileDetails::ProfileId)
                            .to(Profile::Table, Profile::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ProfileAdditionalImage::Table)
                    .if_not_exists()
                    .col(pk_auto(ProfileAdditionalImage::Id))
                    .col(integer(ProfileAdditionalImage::ProfileId))
                    .col(string(ProfileAdditionalImage::Url))
                    .col(string_null(ProfileAdditionalImage::Caption))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_profile_additional_images_profile_id")
                            .from(ProfileAdditionalImage::Table, ProfileAdditionalImage::ProfileId)
                            .to(ProfileImages::Table, ProfileImages::ProfileId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ProfileChannelGroup::Table)
                    .if_not_exists()
                    .col(pk_auto(ProfileChannelGroup::Id))
                    .col(big_integer(ProfileChannelGroup::GuildId))
                    .col(json(ProfileChannelGroup::ChannelIds))
                    .col(json(ProfileChannelGroup::RoleIds))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_profile_channel_groups_guild_id")
                            .from(ProfileChannelGroup::Table, ProfileChannelGroup::GuildId)
                            .to(ProfileManager::Table, ProfileManager::GuildId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One profile per member per guild
        manager
            .create_index(
                Index::create()
                    .name("uq_profiles_guild_id_user_id")
                    .table(Profile::Table)
                    .col(Profile::GuildId)
                    .col(Profile::UserId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ProfileChannelGroup::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ProfileAdditionalImage::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ProfileDetails::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ProfilePersonality::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ProfileAtAGlance::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ProfileImages::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Profile::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ProfileRequirements::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ProfileManager::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum ProfileManager {
    #[sea_orm(iden = "profile_managers")]
    Table,
    GuildId,
}

#[derive(DeriveIden)]
pub enum ProfileRequirements {
    #[sea_orm(iden = "profile_requirements")]
    Table,
    GuildId,
    Url,
    Color,
    Jobs,
    Rates,
    Gender,
    Race,
    Orientation,
    Height,
    Age,
    Mare,
    World,
    Likes,
    Dislikes,
    Personality,
    Aboutme,
    Thumbnail,
    MainImage,
}

#[derive(DeriveIden)]
pub enum Profile {
    #[sea_orm(iden = "profiles")]
    Table,
    Id,
    UserId,
    GuildId,
    PostUrl,
}

#[derive(DeriveIden)]
pub enum ProfileImages {
    #[sea_orm(iden = "profile_images")]
    Table,
    ProfileId,
    ThumbnailUrl,
    MainImageUrl,
}

#[derive(DeriveIden)]
pub enum ProfileAtAGlance {
    #[sea_orm(iden = "profile_at_a_glances")]
    Table,
    ProfileId,
    World,
    GenderEnum,
    Pronouns,
    RaceEnum,
    ClanEnum,
    OrientationEnum,
    RaceCustom,
    ClanCustom,
    OrientationCustom,
    Height,
    Age,
    Mare,
}

#[derive(DeriveIden)]
pub enum ProfilePersonality {
    #[sea_orm(iden = "profile_personalities")]
    Table,
    ProfileId,
    Likes,
    Dislikes,
    Personality,
    Aboutme,
}

#[derive(DeriveIden)]
pub enum ProfileDetails {
    #[sea_orm(iden = "profile_details")]
    Table,
    ProfileId,
    Name,
    CustomUrl,
    Color,
    Jobs,
    Rates,
}

#[derive(DeriveIden)]
pub enum ProfileAdditionalImage {
    #[sea_orm(iden = "profile_additional_images")]
    Table,
    Id,
    ProfileId,
    Url,
    Caption,
}

#[derive(DeriveIden)]
pub enum ProfileChannelGroup {
    #[sea_orm(iden = "profile_channel_groups")]
    Table,
    Id,
    GuildId,
    ChannelIds,
    RoleIds,
}
