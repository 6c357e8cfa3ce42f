//! SeaORM entity models for every table owned by a guild.
//!
//! Each module mirrors one table. Child tables declare a `belongs_to` relation to
//! their owner with `ON DELETE CASCADE`, so the generated schema carries the
//! ownership tree as foreign keys. Singleton attachments (images, header, details,
//! ...) use their owner's id as primary key.

pub mod prelude;

pub mod audit_log;
pub mod guild;
pub mod guild_configuration;

pub mod embed;
pub mod embed_field;
pub mod embed_footer;
pub mod embed_header;
pub mod embed_images;

pub mod form;
pub mod form_post_options;
pub mod form_prompt;
pub mod form_question;
pub mod form_question_option;
pub mod form_question_response;
pub mod form_response_collection;

pub mod giveaway;
pub mod giveaway_details;
pub mod giveaway_entry;
pub mod giveaway_manager;

pub mod raffle;
pub mod raffle_entry;
pub mod raffle_manager;

pub mod reaction_role;
pub mod reaction_role_manager;
pub mod reaction_role_message;

pub mod profile;
pub mod profile_additional_image;
pub mod profile_at_a_glance;
pub mod profile_channel_group;
pub mod profile_details;
pub mod profile_images;
pub mod profile_manager;
pub mod profile_personality;
pub mod profile_requirements;

pub mod position;

pub mod glyph_message;
