//! Explicit subtree deletion over the ownership tree.
//!
//! Every parent to child edge is listed in `children`. A plan is built breadth-first from
//! the root, one level per discovered batch, and executed in reverse so descendants are
//! always deleted before the rows they reference. Foreign keys also declare
//! `ON DELETE CASCADE`, but removal does not depend on it: the traversal is also tested
//! against a database with foreign key enforcement turned off.

use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

use entity::{
    embed, embed_field, embed_footer, embed_header, embed_images, form, form_post_options,
    form_prompt, form_question, form_question_option, form_question_response,
    form_response_collection, giveaway, giveaway_details, giveaway_entry, giveaway_manager,
    glyph_message, guild, guild_configuration, position, profile, profile_additional_image,
    profile_at_a_glance, profile_channel_group, profile_details, profile_images, profile_manager,
    profile_personality, profile_requirements, raffle, raffle_entry, raffle_manager,
    reaction_role, reaction_role_manager, reaction_role_message,
};

use crate::server::mutation::resource::{find_owned_by, Resource, ResourceKind};

/// Batch of same-kind rows discovered at one step of the traversal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlanStep {
    pub kind: ResourceKind,
    pub keys: Vec<i64>,
}

/// Ordered deletion plan for one subtree; the root is the first step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeletionPlan {
    steps: Vec<PlanStep>,
}

impl DeletionPlan {
    pub fn steps(&self) -> &[PlanStep] {
        &self.steps
    }

    /// Number of rows the plan removes, root included.
    pub fn len(&self) -> usize {
        self.steps.iter().map(|step| step.keys.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Deletes every planned row, deepest steps first.
    ///
    /// # Returns
    /// - `Ok(u64)` - Rows deleted
    /// - `Err(DbErr)` - A delete failed; the caller's transaction must be rolled back
    pub async fn execute<C: ConnectionTrait>(&self, conn: &C) -> Result<u64, DbErr> {
        let mut removed = 0;

        for step in self.steps.iter().rev() {
            removed += delete_keys(conn, step.kind, &step.keys).await?;
        }

        Ok(removed)
    }
}

/// Discovers the subtree rooted at `(kind, root)`.
///
/// # Arguments
/// - `conn` - Open transaction of the delete
/// - `kind` - Kind of the root resource
/// - `root` - Key of the root resource
///
/// # Returns
/// - `Ok(DeletionPlan)` - Root plus every reachable descendant
/// - `Err(DbErr)` - Database error during discovery
pub async fn plan<C: ConnectionTrait>(
    conn: &C,
    kind: ResourceKind,
    root: i64,
) -> Result<DeletionPlan, DbErr> {
    let mut steps = vec![PlanStep {
        kind,
        keys: vec![root],
    }];

    let mut cursor = 0;
    while cursor < steps.len() {
        let parent = steps[cursor].clone();
        for step in children(conn, parent.kind, &parent.keys).await? {
            if !step.keys.is_empty() {
                steps.push(step);
            }
        }
        cursor += 1;
    }

    Ok(DeletionPlan { steps })
}

/// Deletes the resource `(kind, root)` and all of its descendants.
///
/// Must be called inside the caller's transaction; an error part-way leaves the
/// transaction to be rolled back as a whole.
pub async fn delete_subtree<C: ConnectionTrait>(
    conn: &C,
    kind: ResourceKind,
    root: i64,
) -> Result<u64, DbErr> {
    let plan = plan(conn, kind, root).await?;

    tracing::debug!(target_kind = %kind, root, rows = plan.len(), "Deleting subtree");

    plan.execute(conn).await
}

async fn keys_of<R, C>(
    conn: &C,
    owner_column: <R::Table as EntityTrait>::Column,
    owners: &[i64],
) -> Result<Vec<i64>, DbErr>
where
    R: Resource,
    C: ConnectionTrait,
{
    Ok(find_owned_by::<R, C>(conn, owner_column, owners)
        .await?
        .iter()
        .map(Resource::key)
        .collect())
}

async fn delete_by_key<R, C>(conn: &C, keys: &[i64]) -> Result<u64, DbErr>
where
    R: Resource,
    C: ConnectionTrait,
{
    let result = R::Table::delete_many()
        .filter(R::key_column().is_in(keys.iter().copied()))
        .exec(conn)
        .await?;

    Ok(result.rows_affected)
}

/// Direct children of a batch of same-kind parents, one step per edge.
async fn children<C: ConnectionTrait>(
    conn: &C,
    kind: ResourceKind,
    parents: &[i64],
) -> Result<Vec<PlanStep>, DbErr> {
    use ResourceKind as K;

    macro_rules! edge {
        ($kind:ident, $module:ident, $owner_column:ident) => {
            PlanStep {
                kind: K::$kind,
                keys: keys_of::<$module::Model, C>(conn, $module::Column::$owner_column, parents)
                    .await?,
            }
        };
    }

    let steps = match kind {
        K::Guild => vec![
            edge!(GuildConfiguration, guild_configuration, GuildId),
            edge!(Embed, embed, GuildId),
            edge!(Form, form, GuildId),
            edge!(GiveawayManager, giveaway_manager, GuildId),
            edge!(RaffleManager, raffle_manager, GuildId),
            edge!(ReactionRoleManager, reaction_role_manager, GuildId),
            edge!(ProfileManager, profile_manager, GuildId),
            edge!(Position, position, GuildId),
            edge!(GlyphMessage, glyph_message, GuildId),
        ],
        K::Embed => vec![
            edge!(EmbedImages, embed_images, EmbedId),
            edge!(EmbedHeader, embed_header, EmbedId),
            edge!(EmbedFooter, embed_footer, EmbedId),
            edge!(EmbedField, embed_field, EmbedId),
        ],
        K::Form => vec![
            edge!(FormPostOptions, form_post_options, FormId),
            edge!(FormPrompt, form_prompt, FormId),
            edge!(FormQuestion, form_question, FormId),
            edge!(FormResponseCollection, form_response_collection, FormId),
        ],
        K::FormQuestion => vec![
            edge!(FormPrompt, form_prompt, QuestionId),
            edge!(FormQuestionOption, form_question_option, QuestionId),
            edge!(FormQuestionResponse, form_question_response, QuestionId),
        ],
        K::GiveawayManager => vec![edge!(Giveaway, giveaway, GuildId)],
        K::Giveaway => vec![
            edge!(GiveawayDetails, giveaway_details, GiveawayId),
            edge!(GiveawayEntry, giveaway_entry, GiveawayId),
        ],
        K::RaffleManager => vec![edge!(Raffle, raffle, GuildId)],
        K::Raffle => vec![edge!(RaffleEntry, raffle_entry, RaffleId)],
        K::ReactionRoleManager => vec![edge!(ReactionRoleMessage, reaction_role_message, GuildId)],
        K::ReactionRoleMessage => vec![edge!(ReactionRole, reaction_role, MessageId)],
        K::ProfileManager => vec![
            edge!(ProfileRequirements, profile_requirements, GuildId),
            edge!(Profile, profile, GuildId),
            edge!(ProfileChannelGroup, profile_channel_group, GuildId),
        ],
        K::Profile => vec![
            edge!(ProfileDetails, profile_details, ProfileId),
            edge!(ProfileAtAGlance, profile_at_a_glance, ProfileId),
            edge!(ProfilePersonality, profile_personality, ProfileId),
            edge!(ProfileImages, profile_images, ProfileId),
        ],
        K::ProfileImages => vec![edge!(ProfileAdditionalImage, profile_additional_image, ProfileId)],
        K::GuildConfiguration
        | K::EmbedImages
        | K::EmbedHeader
        | K::EmbedFooter
        | K::EmbedField
        | K::FormPostOptions
        | K::FormPrompt
        | K::FormQuestionOption
        | K::FormQuestionResponse
        | K::FormResponseCollection
        | K::GiveawayDetails
        | K::GiveawayEntry
        | K::RaffleEntry
        | K::ReactionRole
        | K::ProfileRequirements
        | K::ProfileDetails
        | K::ProfileAtAGlance
        | K::ProfilePersonality
        | K::ProfileAdditionalImage
        | K::ProfileChannelGroup
        | K::Position
        | K::GlyphMessage => Vec::new(),
    };

    Ok(steps)
}

async fn delete_keys<C: ConnectionTrait>(
    conn: &C,
    kind: ResourceKind,
    keys: &[i64],
) -> Result<u64, DbErr> {
    use ResourceKind as K;

    match kind {
        K::Guild => delete_by_key::<guild::Model, C>(conn, keys).await,
        K::GuildConfiguration => delete_by_key::<guild_configuration::Model, C>(conn, keys).await,
        K::Embed => delete_by_key::<embed::Model, C>(conn, keys).await,
        K::EmbedImages => delete_by_key::<embed_images::Model, C>(conn, keys).await,
        K::EmbedHeader => delete_by_key::<embed_header::Model, C>(conn, keys).await,
        K::EmbedFooter => delete_by_key::<embed_footer::Model, C>(conn, keys).await,
        K::EmbedField => delete_by_key::<embed_field::Model, C>(conn, keys).await,
        K::Form => delete_by_key::<form::Model, C>(conn, keys).await,
        K::FormPostOptions => delete_by_key::<form_post_options::Model, C>(conn, keys).await,
        K::FormPrompt => delete_by_key::<form_prompt::Model, C>(conn, keys).await,
        K::FormQuestion => delete_by_key::<form_question::Model, C>(conn, keys).await,
        K::FormQuestionOption => delete_by_key::<form_question_option::Model, C>(conn, keys).await,
        K::FormQuestionResponse => {
            delete_by_key::<form_question_response::Model, C>(conn, keys).await
        }
        K::FormResponseCollection => {
            delete_by_key::<form_response_collection::Model, C>(conn, keys).await
        }
        K::GiveawayManager => delete_by_key::<giveaway_manager::Model, C>(conn, keys).await,
        K::Giveaway => delete_by_key::<giveaway::Model, C>(conn, keys).await,
        K::GiveawayDetails => delete_by_key::<giveaway_details::Model, C>(conn, keys).await,
        K::GiveawayEntry => delete_by_key::<giveaway_entry::Model, C>(conn, keys).await,
        K::RaffleManager => delete_by_key::<raffle_manager::Model, C>(conn, keys).await,
        K::Raffle => delete_by_key::<raffle::Model, C>(conn, keys).await,
        K::RaffleEntry => delete_by_key::<raffle_entry::Model, C>(conn, keys).await,
        K::ReactionRoleManager => {
            delete_by_key::<reaction_role_manager::Model, C>(conn, keys).await
        }
        K::ReactionRoleMessage => {
            delete_by_key::<reaction_role_message::Model, C>(conn, keys).await
        }
        K::ReactionRole => delete_by_key::<reaction_role::Model, C>(conn, keys).await,
        K::ProfileManager => delete_by_key::<profile_manager::Model, C>(conn, keys).await,
        K::ProfileRequirements => {
            delete_by_key::<profile_requirements::Model, C>(conn, keys).await
        }
        K::Profile => delete_by_key::<profile::Model, C>(conn, keys).await,
        K::ProfileDetails => delete_by_key::<profile_details::Model, C>(conn, keys).await,
        K::ProfileAtAGlance => delete_by_key::<profile_at_a_glance::Model, C>(conn, keys).await,
        K::ProfilePersonality => delete_by_key::<profile_personality::Model, C>(conn, keys).await,
        K::ProfileImages => delete_by_key::<profile_images::Model, C>(conn, keys).await,
        K::ProfileAdditionalImage => {
            delete_by_key::<profile_additional_image::Model, C>(conn, keys).await
        }
        K::ProfileChannelGroup => {
            delete_by_key::<profile_channel_group::Model, C>(conn, keys).await
        }
        K::Position => delete_by_key::<position::Model, C>(conn, keys).await,
        K::GlyphMessage => delete_by_key::<glyph_message::Model, C>(conn, keys).await,
    }
}
