//! Forms with their post options, prompts and response collections.
//!
//! Question-level operations live in `question`.

pub mod question;

use chrono::Utc;
use sea_orm::DatabaseConnection;
use serde_json::json;

use entity::{form, form_post_options, form_prompt, form_response_collection};

use crate::server::{
    error::AppError,
    model::{context::MutationContext, fields},
    mutation::{patch, verify_scope, Patch, ResourceKind, UnitOfWork},
};

/// Prompt shown before the first question.
pub const PRE_PROMPT: i32 = 0;
/// Prompt shown after the last question.
pub const POST_PROMPT: i32 = 1;

pub struct FormService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FormService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a form with empty post options and its pre and post prompts.
    ///
    /// # Arguments
    /// - `ctx` - Caller scope
    /// - `patch` - Initial values for any of the form's mutable fields
    ///
    /// # Returns
    /// - `Ok(form::Model)` - The new form
    /// - `Err(AppError::NotFound)` - The caller's guild does not exist
    /// - `Err(AppError::Validation)` - Patch names a field forms do not have
    pub async fn create(
        &self,
        ctx: MutationContext,
        patch: Patch,
    ) -> Result<form::Model, AppError> {
        patch.ensure_only(fields::FORM)?;

        let mut uow = UnitOfWork::begin(self.db, ctx).await?;
        uow.find::<entity::guild::Model>(ctx.guild_id).await?;

        let draft = patch::apply(
            &form::Model {
                id: 0,
                guild_id: ctx.guild_id,
                name: None,
                create_channel: false,
                channel_roles: json!([]),
                creation_category: None,
                post_url: None,
                notify_roles: json!([]),
                notify_users: json!([]),
            },
            &patch,
        )?;
        let form = uow.create(draft).await?;

        uow.attach(form_post_options::Model {
            form_id: form.id,
            description: None,
            thumbnail_url: None,
            color: None,
            button_label: None,
            button_emoji: None,
            channel_id: None,
        })
        .await?;
        for prompt_type in [PRE_PROMPT, POST_PROMPT] {
            uow.attach(empty_prompt(Some(form.id), None, prompt_type))
                .await?;
        }

        uow.commit().await?;

        Ok(form)
    }

    pub async fn update(
        &self,
        ctx: MutationContext,
        form_id: i32,
        patch: Patch,
    ) -> Result<form::Model, AppError> {
        patch.ensure_only(fields::FORM)?;

        let mut uow = UnitOfWork::begin(self.db, ctx).await?;
        let form = load_form(&uow, form_id).await?;

        let form = uow.update(form, &patch).await?;
        uow.commit().await?;

        Ok(form)
    }

    pub async fn update_post_options(
        &self,
        ctx: MutationContext,
        form_id: i32,
        patch: Patch,
    ) -> Result<form_post_options::Model, AppError> {
        patch.ensure_only(fields::FORM_POST_OPTIONS)?;

        let mut uow = UnitOfWork::begin(self.db, ctx).await?;
        let form = load_form(&uow, form_id).await?;

        let options = uow.find::<form_post_options::Model>(form.id.into()).await?;
        verify_scope(ResourceKind::FormPostOptions, form.id, options.form_id)?;

        let options = uow.update(options, &patch).await?;
        uow.commit().await?;

        Ok(options)
    }

    /// Applies a patch to one of the form's own prompts.
    ///
    /// # Returns
    /// - `Ok(form_prompt::Model)` - Updated prompt
    /// - `Err(AppError::Forbidden)` - Form belongs to another guild, or the prompt is
    ///   not one of this form's prompts
    pub async fn update_prompt(
        &self,
        ctx: MutationContext,
        form_id: i32,
        prompt_id: i32,
        patch: Patch,
    ) -> Result<form_prompt::Model, AppError> {
        patch.ensure_only(fields::FORM_PROMPT)?;

        let mut uow = UnitOfWork::begin(self.db, ctx).await?;
        let form = load_form(&uow, form_id).await?;

        let prompt = uow.find::<form_prompt::Model>(prompt_id.into()).await?;
        verify_scope(ResourceKind::FormPrompt, Some(form.id), prompt.form_id)?;

        let prompt = uow.update(prompt, &patch).await?;
        uow.commit().await?;

        Ok(prompt)
    }

    /// Deletes a form with its questions, options, prompts and every response.
    pub async fn delete(&self, ctx: MutationContext, form_id: i32) -> Result<u64, AppError> {
        let mut uow = UnitOfWork::begin(self.db, ctx).await?;
        let form = load_form(&uow, form_id).await?;

        let removed = uow.delete(form).await?;
        uow.commit().await?;

        Ok(removed)
    }

    /// Stores a completed submission of the form by the acting user.
    ///
    /// # Arguments
    /// - `ctx` - Caller scope; `ctx.actor_id` becomes the submitting user
    /// - `form_id` - Submitted form
    /// - `patch` - `data` of the submission
    pub async fn create_response_collection(
        &self,
        ctx: MutationContext,
        form_id: i32,
        patch: Patch,
    ) -> Result<form_response_collection::Model, AppError> {
        patch.ensure_only(fields::FORM_RESPONSE_COLLECTION)?;

        let mut uow = UnitOfWork::begin(self.db, ctx).await?;
        let form = load_form(&uow, form_id).await?;

        let draft = patch::apply(
            &form_response_collection::Model {
                id: 0,
                form_id: form.id,
                user_id: ctx.actor_id,
                data: json!({}),
                submitted_at: Utc::now(),
            },
            &patch,
        )?;

        let collection = uow.create(draft).await?;
        uow.commit().await?;

        Ok(collection)
    }

    pub async fn delete_response_collection(
        &self,
        ctx: MutationContext,
        form_id: i32,
        collection_id: i32,
    ) -> Result<u64, AppError> {
        let mut uow = UnitOfWork::begin(self.db, ctx).await?;
        let form = load_form(&uow, form_id).await?;

        let collection = uow
            .find::<form_response_collection::Model>(collection_id.into())
            .await?;
        verify_scope(
            ResourceKind::FormResponseCollection,
            form.id,
            collection.form_id,
        )?;

        let removed = uow.delete(collection).await?;
        uow.commit().await?;

        Ok(removed)
    }
}

async fn load_form(uow: &UnitOfWork, form_id: i32) -> Result<form::Model, AppError> {
    let form = uow.find::<form::Model>(form_id.into()).await?;
    verify_scope(ResourceKind::Form, uow.context().guild_id, form.guild_id)?;

    Ok(form)
}

fn empty_prompt(
    form_id: Option<i32>,
    question_id: Option<i32>,
    prompt_type: i32,
) -> form_prompt::Model {
    form_prompt::Model {
        id: 0,
        form_id,
        question_id,
        prompt_type,
        title: None,
        description: None,
        thumbnail_url: None,
        show_cancel: false,
        is_active: false,
    }
}
