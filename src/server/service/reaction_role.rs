use sea_orm::DatabaseConnection;

use entity::{reaction_role, reaction_role_manager, reaction_role_message};

use crate::server::{
    error::AppError,
    model::{context::MutationContext, fields},
    mutation::{patch, verify_scope, Patch, ResourceKind, UnitOfWork},
};

/// Message type of new reaction-role messages: members may hold any number of roles.
const DEFAULT_MSG_TYPE: i32 = 1;

pub struct ReactionRoleService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReactionRoleService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn update_manager(
        &self,
        ctx: MutationContext,
        patch: Patch,
    ) -> Result<reaction_role_manager::Model, AppError> {
        patch.ensure_only(fields::REACTION_ROLE_MANAGER)?;

        let mut uow = UnitOfWork::begin(self.db, ctx).await?;
        let manager = load_manager(&uow).await?;

        let manager = uow.update(manager, &patch).await?;
        uow.commit().await?;

        Ok(manager)
    }

    pub async fn create_message(
        &self,
        ctx: MutationContext,
        patch: Patch,
    ) -> Result<reaction_role_message::Model, AppError> {
        patch.ensure_only(fields::REACTION_ROLE_MESSAGE)?;

        let mut uow = UnitOfWork::begin(self.db, ctx).await?;
        let manager = load_manager(&uow).await?;

        let draft = patch::apply(
            &reaction_role_message::Model {
                id: 0,
                guild_id: manager.guild_id,
                title: None,
                description: None,
                thumbnail_url: None,
                post_url: None,
                msg_type: DEFAULT_MSG_TYPE,
                type_param: None,
                color: None,
            },
            &patch,
        )?;

        let message = uow.create(draft).await?;
        uow.commit().await?;

        Ok(message)
    }

    pub async fn update_message(
        &self,
        ctx: MutationContext,
        message_id: i32,
        patch: Patch,
    ) -> Result<reaction_role_message::Model, AppError> {
        patch.ensure_only(fields::REACTION_ROLE_MESSAGE)?;

        let mut uow = UnitOfWork::begin(self.db, ctx).await?;
        let manager = load_manager(&uow).await?;
        let message = load_message(&uow, &manager, message_id).await?;

        let message = uow.update(message, &patch).await?;
        uow.commit().await?;

        Ok(message)
    }

    /// Deletes a message and every role offered on it.
    pub async fn delete_message(
        &self,
        ctx: MutationContext,
        message_id: i32,
    ) -> Result<u64, AppError> {
        let mut uow = UnitOfWork::begin(self.db, ctx).await?;
        let manager = load_manager(&uow).await?;
        let message = load_message(&uow, &manager, message_id).await?;

        let removed = uow.delete(message).await?;
        uow.commit().await?;

        Ok(removed)
    }

    pub async fn add_role(
        &self,
        ctx: MutationContext,
        message_id: i32,
        patch: Patch,
    ) -> Result<reaction_role::Model, AppError> {
        patch.ensure_only(fields::REACTION_ROLE)?;

        let mut uow = UnitOfWork::begin(self.db, ctx).await?;
        let manager = load_manager(&uow).await?;
        let message = load_message(&uow, &manager, message_id).await?;

        let draft = patch::apply(
            &reaction_role::Model {
                id: 0,
                message_id: message.id,
                role_id: None,
                emoji: None,
                label: None,
            },
            &patch,
        )?;

        let role = uow.create(draft).await?;
        uow.commit().await?;

        Ok(role)
    }

    pub async fn update_role(
        &self,
        ctx: MutationContext,
        message_id: i32,
        role_id: i32,
        patch: Patch,
    ) -> Result<reaction_role::Model, AppError> {
        patch.ensure_only(fields::REACTION_ROLE)?;

        let mut uow = UnitOfWork::begin(self.db, ctx).await?;
        let manager = load_manager(&uow).await?;
        let message = load_message(&uow, &manager, message_id).await?;
        let role = load_role(&uow, &message, role_id).await?;

        let role = uow.update(role, &patch).await?;
        uow.commit().await?;

        Ok(role)
    }

    pub async fn delete_role(
        &self,
        ctx: MutationContext,
        message_id: i32,
        role_id: i32,
    ) -> Result<u64, AppError> {
        let mut uow = UnitOfWork::begin(self.db, ctx).await?;
        let manager = load_manager(&uow).await?;
        let message = load_message(&uow, &manager, message_id).await?;
        let role = load_role(&uow, &message, role_id).await?;

        let removed = uow.delete(role).await?;
        uow.commit().await?;

        Ok(removed)
    }
}

async fn load_manager(uow: &UnitOfWork) -> Result<reaction_role_manager::Model, AppError> {
    let guild_id = uow.context().guild_id;
    let manager = uow.find::<reaction_role_manager::Model>(guild_id).await?;
    verify_scope(ResourceKind::ReactionRoleManager, guild_id, manager.guild_id)?;

    Ok(manager)
}

async fn load_message(
    uow: &UnitOfWork,
    manager: &reaction_role_manager::Model,
    message_id: i32,
) -> Result<reaction_role_message::Model, AppError> {
    let message = uow
        .find::<reaction_role_message::Model>(message_id.into())
        .await?;
    verify_scope(
        ResourceKind::ReactionRoleMessage,
        manager.guild_id,
        message.guild_id,
    )?;

    Ok(message)
}

async fn load_role(
    uow: &UnitOfWork,
    message: &reaction_role_message::Model,
    role_id: i32,
) -> Result<reaction_role::Model, AppError> {
    let role = uow.find::<reaction_role::Model>(role_id.into()).await?;
    verify_scope(ResourceKind::ReactionRole, message.id, role.message_id)?;

    Ok(role)
}
