use chrono::Utc;
use serde_json::json;

use entity::{form, form_prompt, form_question, form_question_option, form_question_response};

use crate::server::{
    error::AppError,
    model::{context::MutationContext, fields},
    mutation::{patch, verify_scope, Patch, ResourceKind, UnitOfWork},
};

use super::{empty_prompt, load_form, FormService, POST_PROMPT, PRE_PROMPT};

/// Text input; the default UI of new questions.
const DEFAULT_UI_TYPE: i32 = 0;

impl<'a> FormService<'a> {
    /// Adds a question to a form at the lowest free position, with its two prompts.
    ///
    /// # Arguments
    /// - `ctx` - Caller scope
    /// - `form_id` - Owning form
    /// - `patch` - Initial question fields; any `sort_order` is ignored
    ///
    /// # Returns
    /// - `Ok(form_question::Model)` - The new question
    /// - `Err(AppError::NotFound)` - Form does not exist
    /// - `Err(AppError::Forbidden)` - Form belongs to another guild
    pub async fn create_question(
        &self,
        ctx: MutationContext,
        form_id: i32,
        patch: Patch,
    ) -> Result<form_question::Model, AppError> {
        patch.ensure_only(fields::FORM_QUESTION)?;

        let mut uow = UnitOfWork::begin(self.db, ctx).await?;
        let form = load_form(&uow, form_id).await?;

        let position = uow
            .next_position::<form_question::Model>(form.id.into())
            .await?;
        let mut draft = patch::apply(
            &form_question::Model {
                id: 0,
                form_id: form.id,
                sort_order: position,
                primary_text: None,
                secondary_text: None,
                ui_type: DEFAULT_UI_TYPE,
                required: false,
            },
            &patch,
        )?;
        draft.sort_order = position;

        let question = uow.create(draft).await?;
        for prompt_type in [PRE_PROMPT, POST_PROMPT] {
            uow.attach(empty_prompt(None, Some(question.id), prompt_type))
                .await?;
        }

        uow.commit().await?;

        Ok(question)
    }

    /// Applies a patch to a question, checking an explicit `sort_order` for collisions.
    ///
    /// # Returns
    /// - `Ok(form_question::Model)` - Updated question
    /// - `Err(AppError::Forbidden)` - Form or question is outside the caller's scope
    /// - `Err(AppError::Conflict)` - Another question holds the requested position
    pub async fn update_question(
        &self,
        ctx: MutationContext,
        form_id: i32,
        question_id: i32,
        patch: Patch,
    ) -> Result<form_question::Model, AppError> {
        patch.ensure_only(fields::FORM_QUESTION)?;

        let mut uow = UnitOfWork::begin(self.db, ctx).await?;
        let form = load_form(&uow, form_id).await?;
        let question = load_question(&uow, &form, question_id).await?;

        let question = uow.update_ordered(question, &patch).await?;
        uow.commit().await?;

        Ok(question)
    }

    pub async fn update_question_prompt(
        &self,
        ctx: MutationContext,
        form_id: i32,
        question_id: i32,
        prompt_id: i32,
        patch: Patch,
    ) -> Result<form_prompt::Model, AppError> {
        patch.ensure_only(fields::FORM_PROMPT)?;

        let mut uow = UnitOfWork::begin(self.db, ctx).await?;
        let form = load_form(&uow, form_id).await?;
        let question = load_question(&uow, &form, question_id).await?;

        let prompt = uow.find::<form_prompt::Model>(prompt_id.into()).await?;
        verify_scope(ResourceKind::FormPrompt, Some(question.id), prompt.question_id)?;

        let prompt = uow.update(prompt, &patch).await?;
        uow.commit().await?;

        Ok(prompt)
    }

    /// Deletes a question with its prompts, options and responses.
    pub async fn delete_question(
        &self,
        ctx: MutationContext,
        form_id: i32,
        question_id: i32,
    ) -> Result<u64, AppError> {
        let mut uow = UnitOfWork::begin(self.db, ctx).await?;
        let form = load_form(&uow, form_id).await?;
        let question = load_question(&uow, &form, question_id).await?;

        let removed = uow.delete(question).await?;
        uow.commit().await?;

        Ok(removed)
    }

    /// Adds an option to a question at the lowest free position.
    pub async fn create_option(
        &self,
        ctx: MutationContext,
        form_id: i32,
        question_id: i32,
        patch: Patch,
    ) -> Result<form_question_option::Model, AppError> {
        patch.ensure_only(fields::FORM_QUESTION_OPTION)?;

        let mut uow = UnitOfWork::begin(self.db, ctx).await?;
        let form = load_form(&uow, form_id).await?;
        let question = load_question(&uow, &form, question_id).await?;

        let position = uow
            .next_position::<form_question_option::Model>(question.id.into())
            .await?;
        let mut draft = patch::apply(
            &form_question_option::Model {
                id: 0,
                question_id: question.id,
                label: None,
                description: None,
                value: None,
                emoji: None,
                sort_order: position,
            },
            &patch,
        )?;
        draft.sort_order = position;

        let option = uow.create(draft).await?;
        uow.commit().await?;

        Ok(option)
    }

    /// Applies a patch to an option after checking guild, form and question ownership.
    ///
    /// # Returns
    /// - `Ok(form_question_option::Model)` - Updated option
    /// - `Err(AppError::Forbidden)` - Any link of the guild, form, question, option chain
    ///   does not match
    /// - `Err(AppError::Conflict)` - Another option holds the requested position
    pub async fn update_option(
        &self,
        ctx: MutationContext,
        form_id: i32,
        question_id: i32,
        option_id: i32,
        patch: Patch,
    ) -> Result<form_question_option::Model, AppError> {
        patch.ensure_only(fields::FORM_QUESTION_OPTION)?;

        let mut uow = UnitOfWork::begin(self.db, ctx).await?;
        let form = load_form(&uow, form_id).await?;
        let question = load_question(&uow, &form, question_id).await?;
        let option = load_option(&uow, &question, option_id).await?;

        let option = uow.update_ordered(option, &patch).await?;
        uow.commit().await?;

        Ok(option)
    }

    pub async fn delete_option(
        &self,
        ctx: MutationContext,
        form_id: i32,
        question_id: i32,
        option_id: i32,
    ) -> Result<u64, AppError> {
        let mut uow = UnitOfWork::begin(self.db, ctx).await?;
        let form = load_form(&uow, form_id).await?;
        let question = load_question(&uow, &form, question_id).await?;
        let option = load_option(&uow, &question, option_id).await?;

        let removed = uow.delete(option).await?;
        uow.commit().await?;

        Ok(removed)
    }

    /// Records the acting user's answer to a question.
    ///
    /// # Arguments
    /// - `ctx` - Caller scope; `ctx.actor_id` becomes the responding user
    /// - `form_id` - Owning form
    /// - `question_id` - Answered question
    /// - `patch` - `values` of the answer
    pub async fn submit_response(
        &self,
        ctx: MutationContext,
        form_id: i32,
        question_id: i32,
        patch: Patch,
    ) -> Result<form_question_response::Model, AppError> {
        patch.ensure_only(fields::FORM_QUESTION_RESPONSE)?;

        let mut uow = UnitOfWork::begin(self.db, ctx).await?;
        let form = load_form(&uow, form_id).await?;
        let question = load_question(&uow, &form, question_id).await?;

        let draft = patch::apply(
            &form_question_response::Model {
                id: 0,
                question_id: question.id,
                user_id: ctx.actor_id,
                values: json!([]),
                last_edited: Utc::now(),
            },
            &patch,
        )?;

        let response = uow.create(draft).await?;
        uow.commit().await?;

        Ok(response)
    }

    /// Replaces the values of an answer and stamps `last_edited`.
    pub async fn update_response(
        &self,
        ctx: MutationContext,
        form_id: i32,
        question_id: i32,
        response_id: i32,
        patch: Patch,
    ) -> Result<form_question_response::Model, AppError> {
        patch.ensure_only(fields::FORM_QUESTION_RESPONSE)?;
        let patch = patch.set("last_edited", serde_json::to_value(Utc::now())?);

        let mut uow = UnitOfWork::begin(self.db, ctx).await?;
        let form = load_form(&uow, form_id).await?;
        let question = load_question(&uow, &form, question_id).await?;
        let response = load_response(&uow, &question, response_id).await?;

        let response = uow.update(response, &patch).await?;
        uow.commit().await?;

        Ok(response)
    }

    pub async fn delete_response(
        &self,
        ctx: MutationContext,
        form_id: i32,
        question_id: i32,
        response_id: i32,
    ) -> Result<u64, AppError> {
        let mut uow = UnitOfWork::begin(self.db, ctx).await?;
        let form = load_form(&uow, form_id).await?;
        let question = load_question(&uow, &form, question_id).await?;
        let response = load_response(&uow, &question, response_id).await?;

        let removed = uow.delete(response).await?;
        uow.commit().await?;

        Ok(removed)
    }
}

async fn load_question(
    uow: &UnitOfWork,
    form: &form::Model,
    question_id: i32,
) -> Result<form_question::Model, AppError> {
    let question = uow.find::<form_question::Model>(question_id.into()).await?;
    verify_scope(ResourceKind::FormQuestion, form.id, question.form_id)?;

    Ok(question)
}

async fn load_option(
    uow: &UnitOfWork,
    question: &form_question::Model,
    option_id: i32,
) -> Result<form_question_option::Model, AppError> {
    let option = uow
        .find::<form_question_option::Model>(option_id.into())
        .await?;
    verify_scope(ResourceKind::FormQuestionOption, question.id, option.question_id)?;

    Ok(option)
}

async fn load_response(
    uow: &UnitOfWork,
    question: &form_question::Model,
    response_id: i32,
) -> Result<form_question_response::Model, AppError> {
    let response = uow
        .find::<form_question_response::Model>(response_id.into())
        .await?;
    verify_scope(
        ResourceKind::FormQuestionResponse,
        question.id,
        response.question_id,
    )?;

    Ok(response)
}
