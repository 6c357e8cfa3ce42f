//! Factory methods for creating test data.
//!
//! Factories insert rows directly through SeaORM, bypassing the mutation engine, so tests
//! can arrange state without producing audit entries. Each root resource creates the same
//! mandatory attachments its service would.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let guild = factory::create_guild(&db).await?;
//! let form = factory::create_form(&db, guild.guild_id).await?;
//! let question = factory::create_question(&db, form.id, 0).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let guild = factory::guild::GuildFactory::new(&db).timezone(-5).build().await?;
//! let embed = factory::embed::EmbedFactory::new(&db, guild.guild_id)
//!     .title("Rules")
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `guild` - Guild root with configuration, managers and profile requirements
//! - `embed` - Embeds with attachments, and embed fields
//! - `form` - Forms, prompts, questions, options and responses
//! - `giveaway` - Giveaways with details, and entries
//! - `raffle` - Raffles and entries
//! - `reaction_role` - Reaction-role messages and roles
//! - `profile` - Profiles with attachments, additional images and channel groups
//! - `position` - Staffable positions
//! - `glyph` - Glyph messages
//! - `helpers` - Unique id generation

pub mod embed;
pub mod form;
pub mod giveaway;
pub mod glyph;
pub mod guild;
pub mod helpers;
pub mod position;
pub mod profile;
pub mod raffle;
pub mod reaction_role;

// Re-export commonly used factory functions for concise usage
pub use embed::{create_embed, create_embed_field};
pub use form::{
    create_form, create_option, create_question, create_question_response,
    create_response_collection,
};
pub use giveaway::{create_giveaway, create_giveaway_entry};
pub use glyph::create_glyph_message;
pub use guild::create_guild;
pub use position::create_position;
pub use profile::{create_additional_image, create_channel_group, create_profile};
pub use raffle::{create_raffle, create_raffle_entry};
pub use reaction_role::{create_reaction_role, create_reaction_role_message};
