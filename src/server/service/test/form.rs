use super::*;
use crate::server::service::form::{FormService, POST_PROMPT, PRE_PROMPT};
use serde_json::json;

/// Tests creating a form.
///
/// Expected: Ok with post options and one pre and one post prompt owned by the form
#[tokio::test]
async fn creates_form_with_prompts() -> Result<(), AppError> {
    let test = TestBuilder::new().with_form_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    let form = FormService::new(db)
        .create(
            actor_in(guild.guild_id),
            Patch::new()
                .set("name", "Applications")
                .set("notify_roles", json!([12, 34])),
        )
        .await?;

    assert_eq!(form.name.as_deref(), Some("Applications"));
    assert_eq!(form.notify_roles, json!([12, 34]));
    assert_eq!(form.channel_roles, json!([]));
    assert!(FormPostOptions::find_by_id(form.id).one(db).await?.is_some());

    let mut prompt_types: Vec<i32> = FormPrompt::find()
        .filter(entity::form_prompt::Column::FormId.eq(form.id))
        .all(db)
        .await?
        .iter()
        .map(|prompt| prompt.prompt_type)
        .collect();
    prompt_types.sort_unstable();
    assert_eq!(prompt_types, vec![PRE_PROMPT, POST_PROMPT]);
    assert_eq!(AuditLog::find().count(db).await?, 1);

    Ok(())
}

/// Tests adding questions to a form.
///
/// Expected: Ok with consecutive positions and two prompts per question
#[tokio::test]
async fn creates_questions_in_order() -> Result<(), AppError> {
    let test = TestBuilder::new().with_form_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    let form = factory::create_form(db, guild.guild_id).await?;
    let service = FormService::new(db);
    let ctx = actor_in(guild.guild_id);

    let first = service
        .create_question(ctx, form.id, Patch::new().set("primary_text", "Name?"))
        .await?;
    let second = service
        .create_question(ctx, form.id, Patch::new().set("required", true))
        .await?;

    assert_eq!(first.sort_order, 0);
    assert_eq!(second.sort_order, 1);
    assert!(second.required);
    assert_eq!(
        FormPrompt::find()
            .filter(entity::form_prompt::Column::QuestionId.eq(first.id))
            .count(db)
            .await?,
        2
    );

    Ok(())
}

/// Tests updating an option from a guild that does not own the form.
///
/// Expected: Err(Forbidden) at the form level
#[tokio::test]
async fn forbids_option_update_from_other_guild() -> Result<(), AppError> {
    let test = TestBuilder::new().with_form_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_guild(db).await?;
    let intruder = factory::create_guild(db).await?;
    let form = factory::create_form(db, owner.guild_id).await?;
    let question = factory::create_question(db, form.id, 0).await?;
    let option = factory::create_option(db, question.id, 0).await?;

    let result = FormService::new(db)
        .update_option(
            actor_in(intruder.guild_id),
            form.id,
            question.id,
            option.id,
            Patch::new().set("label", "x"),
        )
        .await;

    assert!(matches!(result, Err(AppError::Forbidden(_))));

    Ok(())
}

/// Tests updating an option through a form the question does not belong to.
///
/// Both forms are in the caller's guild.
///
/// Expected: Err(Forbidden) at the question level
#[tokio::test]
async fn forbids_option_update_through_other_form() -> Result<(), AppError> {
    let test = TestBuilder::new().with_form_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    let form = factory::create_form(db, guild.guild_id).await?;
    let other_form = factory::create_form(db, guild.guild_id).await?;
    let question = factory::create_question(db, other_form.id, 0).await?;
    let option = factory::create_option(db, question.id, 0).await?;

    let result = FormService::new(db)
        .update_option(
            actor_in(guild.guild_id),
            form.id,
            question.id,
            option.id,
            Patch::new().set("label", "x"),
        )
        .await;

    assert!(matches!(result, Err(AppError::Forbidden(_))));

    Ok(())
}

/// Tests updating an option through a question it does not belong to.
///
/// Guild, form and question all match; only the option's question differs.
///
/// Expected: Err(Forbidden) at the option level with the option unchanged
#[tokio::test]
async fn forbids_option_update_through_other_question() -> Result<(), AppError> {
    let test = TestBuilder::new().with_form_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    let form = factory::create_form(db, guild.guild_id).await?;
    let question = factory::create_question(db, form.id, 0).await?;
    let other_question = factory::create_question(db, form.id, 1).await?;
    let option = factory::create_option(db, other_question.id, 0).await?;

    let result = FormService::new(db)
        .update_option(
            actor_in(guild.guild_id),
            form.id,
            question.id,
            option.id,
            Patch::new().set("label", "x"),
        )
        .await;

    assert!(matches!(result, Err(AppError::Forbidden(_))));
    let stored = FormQuestionOption::find_by_id(option.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored, option);

    Ok(())
}

/// Tests updating an option through its real chain.
///
/// Expected: Ok with the label changed and one `FormQuestionOption` Update entry
#[tokio::test]
async fn updates_option_through_own_chain() -> Result<(), AppError> {
    let test = TestBuilder::new().with_form_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    let form = factory::create_form(db, guild.guild_id).await?;
    let question = factory::create_question(db, form.id, 0).await?;
    let option = factory::create_option(db, question.id, 0).await?;

    let updated = FormService::new(db)
        .update_option(
            actor_in(guild.guild_id),
            form.id,
            question.id,
            option.id,
            Patch::new().set("label", "Yes"),
        )
        .await?;

    assert_eq!(updated.label.as_deref(), Some("Yes"));
    let entries = AuditLogRepository::new(db)
        .list_for_target(ResourceKind::FormQuestionOption, option.id.into())
        .await?;
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].changes["label"]["new"], json!("Yes"));

    Ok(())
}

/// Tests editing a question's prompt through the form-level prompt operation.
///
/// Expected: Err(Forbidden) since the prompt belongs to the question, not the form
#[tokio::test]
async fn forbids_question_prompt_as_form_prompt() -> Result<(), AppError> {
    let test = TestBuilder::new().with_form_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    let form = factory::create_form(db, guild.guild_id).await?;
    let question = factory::create_question(db, form.id, 0).await?;
    let prompt = FormPrompt::find()
        .filter(entity::form_prompt::Column::QuestionId.eq(question.id))
        .one(db)
        .await?
        .unwrap();

    let result = FormService::new(db)
        .update_prompt(
            actor_in(guild.guild_id),
            form.id,
            prompt.id,
            Patch::new().set("title", "x"),
        )
        .await;

    assert!(matches!(result, Err(AppError::Forbidden(_))));

    let updated = FormService::new(db)
        .update_question_prompt(
            actor_in(guild.guild_id),
            form.id,
            question.id,
            prompt.id,
            Patch::new().set("title", "Before you start"),
        )
        .await?;
    assert_eq!(updated.title.as_deref(), Some("Before you start"));

    Ok(())
}

/// Tests repositioning a question onto an occupied position.
///
/// Expected: Err(Conflict)
#[tokio::test]
async fn rejects_question_move_to_occupied_position() -> Result<(), AppError> {
    let test = TestBuilder::new().with_form_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    let form = factory::create_form(db, guild.guild_id).await?;
    factory::create_question(db, form.id, 0).await?;
    let second = factory::create_question(db, form.id, 1).await?;

    let result = FormService::new(db)
        .update_question(
            actor_in(guild.guild_id),
            form.id,
            second.id,
            Patch::new().set("sort_order", 0),
        )
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests submitting and then editing an answer.
///
/// Expected: Ok with the acting user as owner and `last_edited` advanced on edit
#[tokio::test]
async fn submits_and_edits_response() -> Result<(), AppError> {
    let test = TestBuilder::new().with_form_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    let form = factory::create_form(db, guild.guild_id).await?;
    let question = factory::create_question(db, form.id, 0).await?;
    let service = FormService::new(db);
    let ctx = actor_in(guild.guild_id);

    let response = service
        .submit_response(ctx, form.id, question.id, Patch::new().set("values", json!(["a"])))
        .await?;
    assert_eq!(response.user_id, ctx.actor_id);
    assert_eq!(response.values, json!(["a"]));

    let edited = service
        .update_response(
            ctx,
            form.id,
            question.id,
            response.id,
            Patch::new().set("values", json!(["b"])),
        )
        .await?;

    assert_eq!(edited.values, json!(["b"]));
    assert!(edited.last_edited >= response.last_edited);

    Ok(())
}

/// Tests deleting a question.
///
/// Expected: Ok with its prompts, options and responses gone and sibling questions kept
#[tokio::test]
async fn deletes_question_subtree() -> Result<(), AppError> {
    let test = TestBuilder::new().with_form_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    let form = factory::create_form(db, guild.guild_id).await?;
    let question = factory::create_question(db, form.id, 0).await?;
    let sibling = factory::create_question(db, form.id, 1).await?;
    factory::create_option(db, question.id, 0).await?;
    factory::create_question_response(db, question.id, 5).await?;

    let removed = FormService::new(db)
        .delete_question(actor_in(guild.guild_id), form.id, question.id)
        .await?;

    assert_eq!(removed, 5);
    assert!(FormQuestion::find_by_id(question.id).one(db).await?.is_none());
    assert!(FormQuestion::find_by_id(sibling.id).one(db).await?.is_some());
    assert_eq!(FormQuestionOption::find().count(db).await?, 0);
    assert_eq!(FormQuestionResponse::find().count(db).await?, 0);
    assert_eq!(
        FormPrompt::find()
            .filter(entity::form_prompt::Column::QuestionId.eq(question.id))
            .count(db)
            .await?,
        0
    );

    Ok(())
}

/// Tests deleting a form with questions, options, responses and submissions.
///
/// Expected: Ok with every descendant gone and one Delete entry targeting the form
#[tokio::test]
async fn deletes_form_subtree() -> Result<(), AppError> {
    let test = TestBuilder::new().with_form_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    let form = factory::create_form(db, guild.guild_id).await?;
    let question = factory::create_question(db, form.id, 0).await?;
    factory::create_option(db, question.id, 0).await?;
    factory::create_question_response(db, question.id, 5).await?;
    factory::create_response_collection(db, form.id, 5).await?;

    FormService::new(db)
        .delete(actor_in(guild.guild_id), form.id)
        .await?;

    assert_eq!(Form::find().count(db).await?, 0);
    assert_eq!(FormPostOptions::find().count(db).await?, 0);
    assert_eq!(FormPrompt::find().count(db).await?, 0);
    assert_eq!(FormQuestion::find().count(db).await?, 0);
    assert_eq!(FormQuestionOption::find().count(db).await?, 0);
    assert_eq!(FormQuestionResponse::find().count(db).await?, 0);
    assert_eq!(FormResponseCollection::find().count(db).await?, 0);

    let entries = AuditLogRepository::new(db).list_for_guild(guild.guild_id).await?;
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].target, "Form");
    assert_eq!(entries[0].target_id, i64::from(form.id));

    Ok(())
}
