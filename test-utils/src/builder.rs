use entity::prelude::*;
use sea_orm::{
    sea_query::{Index, IndexCreateStatement, TableCreateStatement},
    EntityTrait, Schema,
};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables and indexes, then call
/// `build()` to create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{AuditLog, Guild};
///
/// let test = TestBuilder::new()
///     .with_table(Guild)
///     .with_table(AuditLog)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements to execute during database setup, in the order added.
    tables: Vec<TableCreateStatement>,

    /// CREATE INDEX statements executed after every table exists.
    indexes: Vec<IndexCreateStatement>,

    /// Whether SQLite enforces the declared foreign keys.
    foreign_keys: bool,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    ///
    /// # Returns
    /// - New `TestBuilder` instance with empty table configuration
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            indexes: Vec::new(),
            foreign_keys: true,
        }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax, foreign keys included. Tables should be added in dependency order
    /// (tables with foreign keys after their referenced tables).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity implementing `EntityTrait` to create table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds an index to create once all tables exist.
    ///
    /// # Arguments
    /// - `index` - CREATE INDEX statement
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_index(mut self, index: IndexCreateStatement) -> Self {
        self.indexes.push(index);
        self
    }

    /// Disables foreign key enforcement in the built database.
    ///
    /// Use to check that explicit deletes leave nothing behind without help from
    /// `ON DELETE CASCADE`.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn without_foreign_keys(mut self) -> Self {
        self.foreign_keys = false;
        self
    }

    /// Adds the guild root and every guild-level singleton.
    ///
    /// Tables: Guild, GuildConfiguration, AuditLog, GiveawayManager, RaffleManager,
    /// ReactionRoleManager, ProfileManager, ProfileRequirements.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_guild_tables(self) -> Self {
        self.with_table(Guild)
            .with_table(GuildConfiguration)
            .with_table(AuditLog)
            .with_table(GiveawayManager)
            .with_table(RaffleManager)
            .with_table(ReactionRoleManager)
            .with_table(ProfileManager)
            .with_table(ProfileRequirements)
    }

    /// Adds guild tables plus embeds, their attachments and ordered fields.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_embed_tables(self) -> Self {
        self.with_guild_tables().with_embed_family()
    }

    /// Adds guild tables plus forms, questions, options, prompts and responses.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_form_tables(self) -> Self {
        self.with_guild_tables().with_form_family()
    }

    /// Adds guild tables plus giveaways, details and entries.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_giveaway_tables(self) -> Self {
        self.with_guild_tables().with_giveaway_family()
    }

    /// Adds guild tables plus raffles and entries.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_raffle_tables(self) -> Self {
        self.with_guild_tables().with_raffle_family()
    }

    /// Adds guild tables plus reaction-role messages and roles.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_reaction_role_tables(self) -> Self {
        self.with_guild_tables().with_reaction_role_family()
    }

    /// Adds guild tables plus profiles, their attachments and channel groups.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_profile_tables(self) -> Self {
        self.with_guild_tables().with_profile_family()
    }

    /// Adds guild tables plus staffable positions.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_position_tables(self) -> Self {
        self.with_guild_tables().with_table(Position)
    }

    /// Adds guild tables plus glyph messages.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_glyph_tables(self) -> Self {
        self.with_guild_tables().with_table(GlyphMessage)
    }

    /// Adds every table of every family.
    ///
    /// Required when deleting a guild, since the cascade visits every family.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_all_tables(self) -> Self {
        self.with_guild_tables()
            .with_embed_family()
            .with_form_family()
            .with_giveaway_family()
            .with_raffle_family()
            .with_reaction_role_family()
            .with_profile_family()
            .with_table(Position)
            .with_table(GlyphMessage)
    }

    /// Builds and initializes the test context with configured tables and indexes.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with database and tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create the schema
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        if !self.foreign_keys {
            setup.without_foreign_keys().await?;
        }
        setup.with_tables(self.tables).await?;
        setup.with_indexes(self.indexes).await?;

        Ok(setup)
    }

    fn with_embed_family(self) -> Self {
        self.with_table(Embed)
            .with_table(EmbedImages)
            .with_table(EmbedHeader)
            .with_table(EmbedFooter)
            .with_table(EmbedField)
            .with_index(
                Index::create()
                    .name("uq_embed_fields_embed_id_sort_order")
                    .table(EmbedField)
                    .col(entity::embed_field::Column::EmbedId)
                    .col(entity::embed_field::Column::SortOrder)
                    .unique()
                    .to_owned(),
            )
    }

    fn with_form_family(self) -> Self {
        self.with_table(Form)
            .with_table(FormPostOptions)
            .with_table(FormQuestion)
            .with_table(FormPrompt)
            .with_table(FormQuestionOption)
            .with_table(FormQuestionResponse)
            .with_table(FormResponseCollection)
            .with_index(
                Index::create()
                    .name("uq_form_questions_form_id_sort_order")
                    .table(FormQuestion)
                    .col(entity::form_question::Column::FormId)
                    .col(entity::form_question::Column::SortOrder)
                    .unique()
                    .to_owned(),
            )
            .with_index(
                Index::create()
                    .name("uq_form_question_options_question_id_sort_order")
                    .table(FormQuestionOption)
                    .col(entity::form_question_option::Column::QuestionId)
                    .col(entity::form_question_option::Column::SortOrder)
                    .unique()
                    .to_owned(),
            )
    }

    fn with_giveaway_family(self) -> Self {
        self.with_table(Giveaway)
            .with_table(GiveawayDetails)
            .with_table(GiveawayEntry)
            .with_index(
                Index::create()
                    .name("uq_giveaway_entries_giveaway_id_user_id")
                    .table(GiveawayEntry)
                    .col(entity::giveaway_entry::Column::GiveawayId)
                    .col(entity::giveaway_entry::Column::UserId)
                    .unique()
                    .to_owned(),
            )
    }

    fn with_raffle_family(self) -> Self {
        self.with_table(Raffle).with_table(RaffleEntry)
    }

    fn with_reaction_role_family(self) -> Self {
        self.with_table(ReactionRoleMessage)
            .with_table(ReactionRole)
    }

    fn with_profile_family(self) -> Self {
        self.with_table(Profile)
            .with_table(ProfileDetails)
            .with_table(ProfileAtAGlance)
            .with_table(ProfilePersonality)
            .with_table(ProfileImages)
            .with_table(ProfileAdditionalImage)
            .with_table(ProfileChannelGroup)
            .with_index(
                Index::create()
                    .name("uq_profiles_guild_id_user_id")
                    .table(Profile)
                    .col(entity::profile::Column::GuildId)
                    .col(entity::profile::Column::UserId)
                    .unique()
                    .to_owned(),
            )
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
