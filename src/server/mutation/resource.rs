//! Resource kinds and the trait binding each entity model to the mutation engine.
//!
//! `ResourceKind` names every table in the ownership tree and is what the audit log
//! stores as its target. `Resource` gives the engine enough to insert, look up, diff and
//! delete a model generically: its entity, its active model, its key and whether that key
//! is generated by the database or borrowed from the owner (1:1 attachments).

use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter, QuerySelect,
};
use serde::{de::DeserializeOwned, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Guild,
    GuildConfiguration,
    Embed,
    EmbedImages,
    EmbedHeader,
    EmbedFooter,
    EmbedField,
    Form,
    FormPostOptions,
    FormPrompt,
    FormQuestion,
    FormQuestionOption,
    FormQuestionResponse,
    FormResponseCollection,
    GiveawayManager,
    Giveaway,
    GiveawayDetails,
    GiveawayEntry,
    RaffleManager,
    Raffle,
    RaffleEntry,
    ReactionRoleManager,
    ReactionRoleMessage,
    ReactionRole,
    ProfileManager,
    ProfileRequirements,
    Profile,
    ProfileDetails,
    ProfileAtAGlance,
    ProfilePersonality,
    ProfileImages,
    ProfileAdditionalImage,
    ProfileChannelGroup,
    Position,
    GlyphMessage,
}

impl ResourceKind {
    /// Type name recorded as the audit entry target.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Guild => "Guild",
            Self::GuildConfiguration => "GuildConfiguration",
            Self::Embed => "Embed",
            Self::EmbedImages => "EmbedImages",
            Self::EmbedHeader => "EmbedHeader",
            Self::EmbedFooter => "EmbedFooter",
            Self::EmbedField => "EmbedField",
            Self::Form => "Form",
            Self::FormPostOptions => "FormPostOptions",
            Self::FormPrompt => "FormPrompt",
            Self::FormQuestion => "FormQuestion",
            Self::FormQuestionOption => "FormQuestionOption",
            Self::FormQuestionResponse => "FormQuestionResponse",
            Self::FormResponseCollection => "FormResponseCollection",
            Self::GiveawayManager => "GiveawayManager",
            Self::Giveaway => "Giveaway",
            Self::GiveawayDetails => "GiveawayDetails",
            Self::GiveawayEntry => "GiveawayEntry",
            Self::RaffleManager => "RaffleManager",
            Self::Raffle => "Raffle",
            Self::RaffleEntry => "RaffleEntry",
            Self::ReactionRoleManager => "ReactionRoleManager",
            Self::ReactionRoleMessage => "ReactionRoleMessage",
            Self::ReactionRole => "ReactionRole",
            Self::ProfileManager => "ProfileManager",
            Self::ProfileRequirements => "ProfileRequirements",
            Self::Profile => "Profile",
            Self::ProfileDetails => "ProfileDetails",
            Self::ProfileAtAGlance => "ProfileAtAGlance",
            Self::ProfilePersonality => "ProfilePersonality",
            Self::ProfileImages => "ProfileImages",
            Self::ProfileAdditionalImage => "ProfileAdditionalImage",
            Self::ProfileChannelGroup => "ProfileChannelGroup",
            Self::Position => "Position",
            Self::GlyphMessage => "GlyphMessage",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An entity model the mutation engine can create, diff, update and delete.
///
/// Writers additionally bound `R: IntoActiveModel<R::Active>`, which every derived
/// entity model satisfies.
pub trait Resource: Clone + fmt::Debug + Serialize + DeserializeOwned + Send + Sync + 'static {
    type Table: EntityTrait<Model = Self>;
    type Active: ActiveModelTrait<Entity = Self::Table>
        + ActiveModelBehavior
        + From<Self>
        + Send
        + 'static;

    const KIND: ResourceKind;

    /// `true` when the key is assigned by the database on insert, `false` for
    /// attachments keyed by their owner's id.
    const GENERATED_KEY: bool;

    fn key(&self) -> i64;

    fn key_column() -> <Self::Table as EntityTrait>::Column;
}

/// A resource kept in a sibling group ordered by `sort_order`.
pub trait Ordered: Resource {
    fn owner_column() -> <Self::Table as EntityTrait>::Column;

    fn owner(&self) -> i64;

    fn position(&self) -> i32;
}

/// Loads a resource by key.
///
/// # Arguments
/// - `conn` - Connection or open transaction
/// - `key` - Value of the resource's key column
///
/// # Returns
/// - `Ok(Some(R))` - The resource
/// - `Ok(None)` - No row with that key
/// - `Err(DbErr)` - Database error during query
pub async fn find_by_key<R, C>(conn: &C, key: i64) -> Result<Option<R>, DbErr>
where
    R: Resource,
    C: ConnectionTrait,
{
    R::Table::find()
        .filter(R::key_column().eq(key))
        .one(conn)
        .await
}

/// Loads every resource whose owner column is one of `owners`.
pub async fn find_owned_by<R, C>(
    conn: &C,
    owner_column: <R::Table as EntityTrait>::Column,
    owners: &[i64],
) -> Result<Vec<R>, DbErr>
where
    R: Resource,
    C: ConnectionTrait,
{
    R::Table::find()
        .filter(owner_column.is_in(owners.iter().copied()))
        .all(conn)
        .await
}

/// Loads a sibling group with an exclusive row lock where the backend supports one.
///
/// The lock is held until the surrounding transaction ends, which serializes concurrent
/// position assignment within the same group on Postgres. SQLite serializes writers at
/// the database level instead.
pub async fn lock_siblings<R, C>(conn: &C, owner: i64) -> Result<Vec<R>, DbErr>
where
    R: Ordered,
    C: ConnectionTrait,
{
    R::Table::find()
        .filter(R::owner_column().eq(owner))
        .lock_exclusive()
        .all(conn)
        .await
}

macro_rules! resource {
    ($module:ident, $kind:ident, $generated:literal, $key:ident, $key_column:ident) => {
        impl Resource for entity::$module::Model {
            type Table = entity::$module::Entity;
            type Active = entity::$module::ActiveModel;

            const KIND: ResourceKind = ResourceKind::$kind;
            const GENERATED_KEY: bool = $generated;

            fn key(&self) -> i64 {
                i64::from(self.$key)
            }

            fn key_column() -> entity::$module::Column {
                entity::$module::Column::$key_column
            }
        }
    };
}

macro_rules! ordered {
    ($module:ident, $owner:ident, $owner_column:ident) => {
        impl Ordered for entity::$module::Model {
            fn owner_column() -> entity::$module::Column {
                entity::$module::Column::$owner_column
            }

            fn owner(&self) -> i64 {
                i64::from(self.$owner)
            }

            fn position(&self) -> i32 {
                self.sort_order
            }
        }
    };
}

resource!(guild, Guild, false, guild_id, GuildId);
resource!(guild_configuration, GuildConfiguration, false, guild_id, GuildId);
resource!(embed, Embed, true, id, Id);
resource!(embed_images, EmbedImages, false, embed_id, EmbedId);
resource!(embed_header, EmbedHeader, false, embed_id, EmbedId);
resource!(embed_footer, EmbedFooter, false, embed_id, EmbedId);
resource!(embed_field, EmbedField, true, id, Id);
resource!(form, Form, true, id, Id);
resource!(form_post_options, FormPostOptions, false, form_id, FormId);
resource!(form_prompt, FormPrompt, true, id, Id);
resource!(form_question, FormQuestion, true, id, Id);
resource!(form_question_option, FormQuestionOption, true, id, Id);
resource!(form_question_response, FormQuestionResponse, true, id, Id);
resource!(form_response_collection, FormResponseCollection, true, id, Id);
resource!(giveaway_manager, GiveawayManager, false, guild_id, GuildId);
resource!(giveaway, Giveaway, true, id, Id);
resource!(giveaway_details, GiveawayDetails, false, giveaway_id, GiveawayId);
resource!(giveaway_entry, GiveawayEntry, true, id, Id);
resource!(raffle_manager, RaffleManager, false, guild_id, GuildId);
resource!(raffle, Raffle, true, id, Id);
resource!(raffle_entry, RaffleEntry, true, id, Id);
resource!(reaction_role_manager, ReactionRoleManager, false, guild_id, GuildId);
resource!(reaction_role_message, ReactionRoleMessage, true, id, Id);
resource!(reaction_role, ReactionRole, true, id, Id);
resource!(profile_manager, ProfileManager, false, guild_id, GuildId);
resource!(profile_requirements, ProfileRequirements, false, guild_id, GuildId);
resource!(profile, Profile, true, id, Id);
resource!(profile_details, ProfileDetails, false, profile_id, ProfileId);
resource!(profile_at_a_glance, ProfileAtAGlance, false, profile_id, ProfileId);
resource!(profile_personality, ProfilePersonality, false, profile_id, ProfileId);
resource!(profile_images, ProfileImages, false, profile_id, ProfileId);
resource!(profile_additional_image, ProfileAdditionalImage, true, id, Id);
resource!(profile_channel_group, ProfileChannelGroup, true, id, Id);
resource!(position, Position, true, id, Id);
resource!(glyph_message, GlyphMessage, true, id, Id);

ordered!(embed_field, embed_id, EmbedId);
ordered!(form_question, form_id, FormId);
ordered!(form_question_option, question_id, QuestionId);
