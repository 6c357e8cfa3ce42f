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
                    .table(Form::Table)
                    .if_not_exists()
                    .col(pk_auto(Form::Id))
                    .col(big_integer(Form::GuildId))
                    .col(string_null(Form::Name))
                    .col(boolean(Form::CreateChannel).default(false))
                    .col(json(Form::ChannelRoles))
                    .col(big_integer_null(Form::CreationCategory))
                    .col(string_null(Form::PostUrl))
                    .col(json(Form::NotifyRoles))
                    .col(json(Form::NotifyUsers))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_forms_guild_id")
                            .from(Form::Table, Form::GuildId)
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
                    .table(FormPostOptions::Table)
                    .if_not_exists()
                    .col(integer(FormPostOptions::FormId).primary_key())
                    .col(string_null(FormPostOptions::Description))
                    .col(string_null(FormPostOptions::ThumbnailUrl))
                    .col(integer_null(FormPostOptions::Color))
                    .col(string_null(FormPostOptions::ButtonLabel))
                    .col(string_null(FormPostOptions::ButtonEmoji))
                    .col(big_integer_null(FormPostOptions::ChannelId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_form_post_options_form_id")
                            .from(FormPostOptions::Table, FormPostOptions::FormId)
                            .to(Form::Table, Form::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(FormQuestion::Table)
                    .if_not_exists()
                    .col(pk_auto(FormQuestion::Id))
                    .col(integer(FormQuestion::FormId))
                    .col(integer(FormQuestion::SortOrder))
                    .col(string_null(FormQuestion::PrimaryText))
                    .col(string_null(FormQuestion::SecondaryText))
                    .col(integer(FormQuestion::UiType).default(0))
                    .col(boolean(FormQuestion::Required).default(false))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_form_questions_form_id")
                            .from(FormQuestion::Table, FormQuestion::FormId)
                            .to(Form::Table, Form::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(FormQuestionResponse::Table)
                    .if_not_exists()
                    .col(pk_auto(FormQuestionResponse::Id))
                    .col(integer(FormQuestionResponse::QuestionId))
                    .col(big_integer(FormQuestionResponse::UserId))
                    .col(json(FormQuestionResponse::Values))
                    .col(timestamp_with_time_zone(FormQuestionResponse::LastEdited).default(Expr::current_timestamp()))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_form_question_responses_question_id")
                            .from(FormQuestionResponse::Table, FormQuestionResponse::QuestionId)
                            .to(FormQuestion::Table, FormQuestion::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(FormResponseCollection::Table)
                    .if_not_exists()
                    .col(pk_auto(FormResponseCollection::Id))
                    .col(integer(FormResponseCollection::FormId))
                    .col(big_integer(FormResponseCollection::UserId))
                    .col(json(FormResponseCollection::Data))
                    .col(timestamp_with_time_zone(FormResponseCollection::SubmittedAt).default(Expr::current_timestamp()))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_form_response_collections_form_id")
                            .from(FormResponseCollection::Table, FormResponseCollection::FormId)
                            .to(Form::Table, Form::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(FormPrompt::Table)
                    .if_not_exists()
                    .col(pk_auto(FormPrompt::Id))
                    .col(integer_null(FormPrompt::FormId))
                    .col(integer_null(FormPrompt::QuestionId))
                    .col(integer(FormPrompt::PromptType))
                    .col(string_null(FormPrompt::Title))
                    .col(string_null(FormPrompt::Description))
                    .col(string_null(FormPrompt::ThumbnailUrl))
                    .col(boolean(FormPrompt::ShowCancel).default(false))
                    .col(boolean(FormPrompt::IsActive).default(false))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_form_prompts_form_id")
                            .from(FormPrompt::Table, FormPrompt::FormId)
                            .to(Form::Table, Form::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_form_prompts_question_id")
                            .from(FormPrompt::Table, FormPrompt::QuestionId)
                            .to(FormQuestion::Table, FormQuestion::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(FormQuestionOption::Table)
                    .if_not_exists()
                    .col(pk_auto(FormQuestionOption::Id))
                    .col(integer(FormQuestionOption::QuestionId))
                    .col(string_null(FormQuestionOption::Label))
                    .col(string_null(FormQuestionOption::Description))
                    .col(string_null(FormQuestionOption::Value))
                    .col(string_null(FormQuestionOption::Emoji))
                    .col(integer(FormQuestionOption::SortOrder))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_form_question_options_question_id")
                            .from(FormQuestionOption::Table, FormQuestionOption::QuestionId)
                            .to(FormQuestion::Table, FormQuestion::Id)
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
                    .name("uq_form_questions_form_id_sort_order")
                    .table(FormQuestion::Table)
                    .col(FormQuestion::FormId)
                    .col(FormQuestion::SortOrder)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Backstop for the sibling ordering check
        manager
            .create_index(
                Index::create()
                    .name("uq_form_question_options_question_id_sort_order")
                    .table(FormQuestionOption::Table)
                    .col(FormQuestionOption::QuestionId)
                    .col(FormQuestionOption::SortOrder)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FormQuestionOption::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(FormPrompt::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(FormResponseCollection::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(FormQuestionResponse::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(FormQuestion::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(FormPostOptions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Form::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Form {
    #[sea_orm(iden = "forms")]
    Table,
    Id,
    GuildId,
    Name,
    CreateChannel,
    ChannelRoles,
    CreationCategory,
    PostUrl,
    NotifyRoles,
    NotifyUsers,
}

#[derive(DeriveIden)]
pub enum FormPostOptions {
    #[sea_orm(iden = "form_post_options")]
    Table,
    FormId,
    Description,
    ThumbnailUrl,
    Color,
    ButtonLabel,
    ButtonEmoji,
    ChannelId,
}

#[derive(DeriveIden)]
pub enum FormQuestion {
    #[sea_orm(iden = "form_questions")]
    Table,
    Id,
    FormId,
    SortOrder,
    PrimaryText,
    SecondaryText,
    UiType,
    Required,
}

#[derive(DeriveIden)]
pub enum FormQuestionResponse {
    #[sea_orm(iden = "form_question_responses")]
    Table,
    Id,
    QuestionId,
    UserId,
    Values,
    LastEdited,
}

#[derive(DeriveIden)]
pub enum FormResponseCollection {
    #[sea_orm(iden = "form_response_collections")]
    Table,
    Id,
    FormId,
    UserId,
    Data,
    SubmittedAt,
}

#[derive(DeriveIden)]
pub enum FormPrompt {
    #[sea_orm(iden = "form_prompts")]
    Table,
    Id,
    FormId,
    QuestionId,
    PromptType,
    Title,
    Description,
    ThumbnailUrl,
    ShowCancel,
    IsActive,
}

#[derive(DeriveIden)]
pub enum FormQuestionOption {
    #[sea_orm(iden = "form_question_options")]
    Table,
    Id,
    QuestionId,
    Label,
    Description,
    Value,
    Emoji,
    SortOrder,
}
