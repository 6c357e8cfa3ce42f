//! Form factory for creating test forms, questions, options, prompts and responses.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use serde_json::json;

/// Prompt types provisioned for every form and question.
pub const PRE_PROMPT: i32 = 0;
pub const POST_PROMPT: i32 = 1;

/// Factory for creating test forms with customizable fields.
///
/// Inserts the form together with its post options and its pre and post prompts.
///
/// # Example
///
/// ```rust,ignore
/// let form = FormFactory::new(&db, guild.guild_id)
///     .name("Applications")
///     .create_channel(true)
///     .build()
///     .await?;
/// ```
pub struct FormFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: i64,
    name: Option<String>,
    create_channel: bool,
}

impl<'a> FormFactory<'a> {
    /// Creates a new FormFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Form {id}"` where id is auto-incremented
    /// - create_channel: false
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entities
    /// - `guild_id` - Guild owning the form
    ///
    /// # Returns
    /// - `FormFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, guild_id: i64) -> Self {
        Self {
            db,
            guild_id,
            name: Some(format!("Form {}", next_id())),
            create_channel: false,
        }
    }

    /// Sets the form name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets whether submissions open a channel.
    pub fn create_channel(mut self, create_channel: bool) -> Self {
        self.create_channel = create_channel;
        self
    }

    /// Builds and inserts the form, its post options and prompts.
    ///
    /// # Returns
    /// - `Ok(entity::form::Model)` - Created form
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::form::Model, DbErr> {
        let form = entity::form::ActiveModel {
            id: ActiveValue::NotSet,
            guild_id: ActiveValue::Set(self.guild_id),
            name: ActiveValue::Set(self.name),
            create_channel: ActiveValue::Set(self.create_channel),
            channel_roles: ActiveValue::Set(json!([])),
            creation_category: ActiveValue::Set(None),
            post_url: ActiveValue::Set(None),
            notify_roles: ActiveValue::Set(json!([])),
            notify_users: ActiveValue::Set(json!([])),
        }
        .insert(self.db)
        .await?;

        entity::form_post_options::ActiveModel {
            form_id: ActiveValue::Set(form.id),
            description: ActiveValue::Set(None),
            thumbnail_url: ActiveValue::Set(None),
            color: ActiveValue::Set(None),
            button_label: ActiveValue::Set(None),
            button_emoji: ActiveValue::Set(None),
            channel_id: ActiveValue::Set(None),
        }
        .insert(self.db)
        .await?;

        for prompt_type in [PRE_PROMPT, POST_PROMPT] {
            create_prompt(self.db, Some(form.id), None, prompt_type).await?;
        }

        Ok(form)
    }
}

/// Creates a form with default values, its post options and prompts.
pub async fn create_form(
    db: &DatabaseConnection,
    guild_id: i64,
) -> Result<entity::form::Model, DbErr> {
    FormFactory::new(db, guild_id).build().await
}

/// Creates a prompt owned by a form or by a question.
///
/// # Arguments
/// - `db` - Database connection
/// - `form_id` - Owning form, for form prompts
/// - `question_id` - Owning question, for question prompts
/// - `prompt_type` - `PRE_PROMPT` or `POST_PROMPT`
///
/// # Returns
/// - `Ok(entity::form_prompt::Model)` - Created prompt
/// - `Err(DbErr)` - Database error during insert
pub async fn create_prompt(
    db: &DatabaseConnection,
    form_id: Option<i32>,
    question_id: Option<i32>,
    prompt_type: i32,
) -> Result<entity::form_prompt::Model, DbErr> {
    entity::form_prompt::ActiveModel {
        id: ActiveValue::NotSet,
        form_id: ActiveValue::Set(form_id),
        question_id: ActiveValue::Set(question_id),
        prompt_type: ActiveValue::Set(prompt_type),
        title: ActiveValue::Set(None),
        description: ActiveValue::Set(None),
        thumbnail_url: ActiveValue::Set(None),
        show_cancel: ActiveValue::Set(false),
        is_active: ActiveValue::Set(false),
    }
    .insert(db)
    .await
}

/// Creates a question at an explicit position, with its pre and post prompts.
///
/// # Arguments
/// - `db` - Database connection
/// - `form_id` - ID of the owning form
/// - `sort_order` - Position within the form's questions
///
/// # Returns
/// - `Ok(entity::form_question::Model)` - Created question
/// - `Err(DbErr)` - Database error during insert
pub async fn create_question(
    db: &DatabaseConnection,
    form_id: i32,
    sort_order: i32,
) -> Result<entity::form_question::Model, DbErr> {
    let question = entity::form_question::ActiveModel {
        id: ActiveValue::NotSet,
        form_id: ActiveValue::Set(form_id),
        sort_order: ActiveValue::Set(sort_order),
        primary_text: ActiveValue::Set(Some(format!("Question {}", next_id()))),
        secondary_text: ActiveValue::Set(None),
        ui_type: ActiveValue::Set(0),
        required: ActiveValue::Set(false),
    }
    .insert(db)
    .await?;

    for prompt_type in [PRE_PROMPT, POST_PROMPT] {
        create_prompt(db, None, Some(question.id), prompt_type).await?;
    }

    Ok(question)
}

/// Creates a question option at an explicit position.
pub async fn create_option(
    db: &DatabaseConnection,
    question_id: i32,
    sort_order: i32,
) -> Result<entity::form_question_option::Model, DbErr> {
    let id = next_id();
    entity::form_question_option::ActiveModel {
        id: ActiveValue::NotSet,
        question_id: ActiveValue::Set(question_id),
        label: ActiveValue::Set(Some(format!("Option {}", id))),
        description: ActiveValue::Set(None),
        value: ActiveValue::Set(Some(id.to_string())),
        emoji: ActiveValue::Set(None),
        sort_order: ActiveValue::Set(sort_order),
    }
    .insert(db)
    .await
}

/// Creates a member's response to a question.
pub async fn create_question_response(
    db: &DatabaseConnection,
    question_id: i32,
    user_id: i64,
) -> Result<entity::form_question_response::Model, DbErr> {
    entity::form_question_response::ActiveModel {
        id: ActiveValue::NotSet,
        question_id: ActiveValue::Set(question_id),
        user_id: ActiveValue::Set(user_id),
        values: ActiveValue::Set(json!(["yes"])),
        last_edited: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}

/// Creates a member's submitted response collection for a form.
pub async fn create_response_collection(
    db: &DatabaseConnection,
    form_id: i32,
    user_id: i64,
) -> Result<entity::form_response_collection::Model, DbErr> {
    entity::form_response_collection::ActiveModel {
        id: ActiveValue::NotSet,
        form_id: ActiveValue::Set(form_id),
        user_id: ActiveValue::Set(user_id),
        data: ActiveValue::Set(json!({})),
        submitted_at: ActiveValue::Set(Utc::now()),
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
    use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};

    #[tokio::test]
    async fn creates_form_with_prompts() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_form_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let guild = create_guild(db).await?;
        let form = create_form(db, guild.guild_id).await?;

        let prompts = FormPrompt::find()
            .filter(entity::form_prompt::Column::FormId.eq(form.id))
            .count(db)
            .await?;
        assert_eq!(prompts, 2);
        assert!(FormPostOptions::find_by_id(form.id).one(db).await?.is_some());

        Ok(())
    }

    #[tokio::test]
    async fn creates_question_chain() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_form_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let guild = create_guild(db).await?;
        let form = create_form(db, guild.guild_id).await?;
        let question = create_question(db, form.id, 0).await?;
        let option = create_option(db, question.id, 0).await?;

        assert_eq!(question.form_id, form.id);
        assert_eq!(option.question_id, question.id);

        Ok(())
    }
}
