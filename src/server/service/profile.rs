use sea_orm::DatabaseConnection;
use serde_json::json;

use entity::{
    profile, profile_additional_image, profile_at_a_glance, profile_channel_group,
    profile_details, profile_images, profile_manager, profile_personality, profile_requirements,
};

use crate::server::{
    error::AppError,
    model::{context::MutationContext, fields},
    mutation::{patch, resource::find_owned_by, verify_scope, Patch, ResourceKind, UnitOfWork},
};

pub struct ProfileService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProfileService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Toggles which profile sections members must fill in.
    pub async fn update_requirements(
        &self,
        ctx: MutationContext,
        patch: Patch,
    ) -> Result<profile_requirements::Model, AppError> {
        patch.ensure_only(fields::PROFILE_REQUIREMENTS)?;

        let mut uow = UnitOfWork::begin(self.db, ctx).await?;
        let manager = load_manager(&uow).await?;

        let requirements = uow
            .find::<profile_requirements::Model>(manager.guild_id)
            .await?;
        verify_scope(
            ResourceKind::ProfileRequirements,
            manager.guild_id,
            requirements.guild_id,
        )?;

        let requirements = uow.update(requirements, &patch).await?;
        uow.commit().await?;

        Ok(requirements)
    }

    /// Creates the acting user's profile with empty details, at-a-glance, personality and
    /// images sections.
    ///
    /// # Arguments
    /// - `ctx` - Caller scope; `ctx.actor_id` becomes the profile owner
    /// - `patch` - Optional `post_url`
    ///
    /// # Returns
    /// - `Ok(profile::Model)` - The new profile
    /// - `Err(AppError::NotFound)` - The guild has no profile manager
    /// - `Err(AppError::Conflict)` - The user already has a profile in this guild
    pub async fn create(
        &self,
        ctx: MutationContext,
        patch: Patch,
    ) -> Result<profile::Model, AppError> {
        patch.ensure_only(fields::PROFILE)?;

        let mut uow = UnitOfWork::begin(self.db, ctx).await?;
        let manager = load_manager(&uow).await?;

        let profiles = find_owned_by::<profile::Model, _>(
            uow.conn(),
            profile::Column::GuildId,
            &[manager.guild_id],
        )
        .await?;
        if profiles.iter().any(|profile| profile.user_id == ctx.actor_id) {
            return Err(AppError::Conflict(format!(
                "User {} already has a profile in guild {}",
                ctx.actor_id, manager.guild_id
            )));
        }

        let draft = patch::apply(
            &profile::Model {
                id: 0,
                user_id: ctx.actor_id,
                guild_id: manager.guild_id,
                post_url: None,
            },
            &patch,
        )?;
        let profile = uow.create(draft).await?;

        uow.attach(profile_details::Model {
            profile_id: profile.id,
            name: None,
            custom_url: None,
            color: None,
            jobs: json!([]),
            rates: None,
        })
        .await?;
        uow.attach(profile_at_a_glance::Model {
            profile_id: profile.id,
            world: None,
            gender_enum: None,
            pronouns: json!([]),
            race_enum: None,
            clan_enum: None,
            orientation_enum: None,
            race_custom: None,
            clan_custom: None,
            orientation_custom: None,
            height: None,
            age: None,
            mare: None,
        })
        .await?;
        uow.attach(profile_personality::Model {
            profile_id: profile.id,
            likes: None,
            dislikes: None,
            personality: None,
            aboutme: None,
        })
        .await?;
        uow.attach(profile_images::Model {
            profile_id: profile.id,
            thumbnail_url: None,
            main_image_url: None,
        })
        .await?;

        uow.commit().await?;

        Ok(profile)
    }

    pub async fn update(
        &self,
        ctx: MutationContext,
        profile_id: i32,
        patch: Patch,
    ) -> Result<profile::Model, AppError> {
        patch.ensure_only(fields::PROFILE)?;

        let mut uow = UnitOfWork::begin(self.db, ctx).await?;
        let manager = load_manager(&uow).await?;
        let profile = load_profile(&uow, &manager, profile_id).await?;

        let profile = uow.update(profile, &patch).await?;
        uow.commit().await?;

        Ok(profile)
    }

    pub async fn update_details(
        &self,
        ctx: MutationContext,
        profile_id: i32,
        patch: Patch,
    ) -> Result<profile_details::Model, AppError> {
        patch.ensure_only(fields::PROFILE_DETAILS)?;

        let mut uow = UnitOfWork::begin(self.db, ctx).await?;
        let manager = load_manager(&uow).await?;
        let profile = load_profile(&uow, &manager, profile_id).await?;

        let details = uow.find::<profile_details::Model>(profile.id.into()).await?;
        verify_scope(ResourceKind::ProfileDetails, profile.id, details.profile_id)?;

        let details = uow.update(details, &patch).await?;
        uow.commit().await?;

        Ok(details)
    }

    pub async fn update_at_a_glance(
        &self,
        ctx: MutationContext,
        profile_id: i32,
        patch: Patch,
    ) -> Result<profile_at_a_glance::Model, AppError> {
        patch.ensure_only(fields::PROFILE_AT_A_GLANCE)?;

        let mut uow = UnitOfWork::begin(self.db, ctx).await?;
        let manager = load_manager(&uow).await?;
        let profile = load_profile(&uow, &manager, profile_id).await?;

        let glance = uow
            .find::<profile_at_a_glance::Model>(profile.id.into())
            .await?;
        verify_scope(ResourceKind::ProfileAtAGlance, profile.id, glance.profile_id)?;

        let glance = uow.update(glance, &patch).await?;
        uow.commit().await?;

        Ok(glance)
    }

    pub async fn update_personality(
        &self,
        ctx: MutationContext,
        profile_id: i32,
        patch: Patch,
    ) -> Result<profile_personality::Model, AppError> {
        patch.ensure_only(fields::PROFILE_PERSONALITY)?;

        let mut uow = UnitOfWork::begin(self.db, ctx).await?;
        let manager = load_manager(&uow).await?;
        let profile = load_profile(&uow, &manager, profile_id).await?;

        let personality = uow
            .find::<profile_personality::Model>(profile.id.into())
            .await?;
        verify_scope(
            ResourceKind::ProfilePersonality,
            profile.id,
            personality.profile_id,
        )?;

        let personality = uow.update(personality, &patch).await?;
        uow.commit().await?;

        Ok(personality)
    }

    pub async fn update_images(
        &self,
        ctx: MutationContext,
        profile_id: i32,
        patch: Patch,
    ) -> Result<profile_images::Model, AppError> {
        patch.ensure_only(fields::PROFILE_IMAGES)?;

        let mut uow = UnitOfWork::begin(self.db, ctx).await?;
        let manager = load_manager(&uow).await?;
        let profile = load_profile(&uow, &manager, profile_id).await?;
        let images = load_images(&uow, &profile).await?;

        let images = uow.update(images, &patch).await?;
        uow.commit().await?;

        Ok(images)
    }

    /// Deletes a profile with its sections and additional images.
    pub async fn delete(&self, ctx: MutationContext, profile_id: i32) -> Result<u64, AppError> {
        let mut uow = UnitOfWork::begin(self.db, ctx).await?;
        let manager = load_manager(&uow).await?;
        let profile = load_profile(&uow, &manager, profile_id).await?;

        let removed = uow.delete(profile).await?;
        uow.commit().await?;

        Ok(removed)
    }

    /// Adds an image to a profile's gallery.
    ///
    /// # Returns
    /// - `Ok(profile_additional_image::Model)` - The new image
    /// - `Err(AppError::Validation)` - Patch has no `url`
    pub async fn add_additional_image(
        &self,
        ctx: MutationContext,
        profile_id: i32,
        patch: Patch,
    ) -> Result<profile_additional_image::Model, AppError> {
        patch.ensure_only(fields::PROFILE_ADDITIONAL_IMAGE)?;
        if !patch.contains("url") {
            return Err(AppError::Validation(
                "Additional images require a url".to_string(),
            ));
        }

        let mut uow = UnitOfWork::begin(self.db, ctx).await?;
        let manager = load_manager(&uow).await?;
        let profile = load_profile(&uow, &manager, profile_id).await?;
        let images = load_images(&uow, &profile).await?;

        let draft = patch::apply(
            &profile_additional_image::Model {
                id: 0,
                profile_id: images.profile_id,
                url: String::new(),
                caption: None,
            },
            &patch,
        )?;

        let image = uow.create(draft).await?;
        uow.commit().await?;

        Ok(image)
    }

    pub async fn update_additional_image(
        &self,
        ctx: MutationContext,
        profile_id: i32,
        image_id: i32,
        patch: Patch,
    ) -> Result<profile_additional_image::Model, AppError> {
        patch.ensure_only(fields::PROFILE_ADDITIONAL_IMAGE)?;

        let mut uow = UnitOfWork::begin(self.db, ctx).await?;
        let manager = load_manager(&uow).await?;
        let profile = load_profile(&uow, &manager, profile_id).await?;
        let images = load_images(&uow, &profile).await?;
        let image = load_additional_image(&uow, &images, image_id).await?;

        let image = uow.update(image, &patch).await?;
        uow.commit().await?;

        Ok(image)
    }

    pub async fn delete_additional_image(
        &self,
        ctx: MutationContext,
        profile_id: i32,
        image_id: i32,
    ) -> Result<u64, AppError> {
        let mut uow = UnitOfWork::begin(self.db, ctx).await?;
        let manager = load_manager(&uow).await?;
        let profile = load_profile(&uow, &manager, profile_id).await?;
        let images = load_images(&uow, &profile).await?;
        let image = load_additional_image(&uow, &images, image_id).await?;

        let removed = uow.delete(image).await?;
        uow.commit().await?;

        Ok(removed)
    }

    pub async fn create_channel_group(
        &self,
        ctx: MutationContext,
        patch: Patch,
    ) -> Result<profile_channel_group::Model, AppError> {
        patch.ensure_only(fields::PROFILE_CHANNEL_GROUP)?;

        let mut uow = UnitOfWork::begin(self.db, ctx).await?;
        let manager = load_manager(&uow).await?;

        let draft = patch::apply(
            &profile_channel_group::Model {
                id: 0,
                guild_id: manager.guild_id,
                channel_ids: json!([]),
                role_ids: json!([]),
            },
            &patch,
        )?;

        let group = uow.create(draft).await?;
        uow.commit().await?;

        Ok(group)
    }

    pub async fn update_channel_group(
        &self,
        ctx: MutationContext,
        group_id: i32,
        patch: Patch,
    ) -> Result<profile_channel_group::Model, AppError> {
        patch.ensure_only(fields::PROFILE_CHANNEL_GROUP)?;

        let mut uow = UnitOfWork::begin(self.db, ctx).await?;
        let manager = load_manager(&uow).await?;
        let group = load_channel_group(&uow, &manager, group_id).await?;

        let group = uow.update(group, &patch).await?;
        uow.commit().await?;

        Ok(group)
    }

    pub async fn delete_channel_group(
        &self,
        ctx: MutationContext,
        group_id: i32,
    ) -> Result<u64, AppError> {
        let mut uow = UnitOfWork::begin(self.db, ctx).await?;
        let manager = load_manager(&uow).await?;
        let group = load_channel_group(&uow, &manager, group_id).await?;

        let removed = uow.delete(group).await?;
        uow.commit().await?;

        Ok(removed)
    }
}

async fn load_manager(uow: &UnitOfWork) -> Result<profile_manager::Model, AppError> {
    let guild_id = uow.context().guild_id;
    let manager = uow.find::<profile_manager::Model>(guild_id).await?;
    verify_scope(ResourceKind::ProfileManager, guild_id, manager.guild_id)?;

    Ok(manager)
}

async fn load_profile(
    uow: &UnitOfWork,
    manager: &profile_manager::Model,
    profile_id: i32,
) -> Result<profile::Model, AppError> {
    let profile = uow.find::<profile::Model>(profile_id.into()).await?;
    verify_scope(ResourceKind::Profile, manager.guild_id, profile.guild_id)?;

    Ok(profile)
}

async fn load_images(
    uow: &UnitOfWork,
    profile: &profile::Model,
) -> Result<profile_images::Model, AppError> {
    let images = uow.find::<profile_images::Model>(profile.id.into()).await?;
    verify_scope(ResourceKind::ProfileImages, profile.id, images.profile_id)?;

    Ok(images)
}

async fn load_additional_image(
    uow: &UnitOfWork,
    images: &profile_images::Model,
    image_id: i32,
) -> Result<profile_additional_image::Model, AppError> {
    let image = uow
        .find::<profile_additional_image::Model>(image_id.into())
        .await?;
    verify_scope(
        ResourceKind::ProfileAdditionalImage,
        images.profile_id,
        image.profile_id,
    )?;

    Ok(image)
}

async fn load_channel_group(
    uow: &UnitOfWork,
    manager: &profile_manager::Model,
    group_id: i32,
) -> Result<profile_channel_group::Model, AppError> {
    let group = uow
        .find::<profile_channel_group::Model>(group_id.into())
        .await?;
    verify_scope(ResourceKind::ProfileChannelGroup, manager.guild_id, group.guild_id)?;

    Ok(group)
}
