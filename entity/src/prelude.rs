pub use super::audit_log::Entity as AuditLog;
pub use super::embed::Entity as Embed;
pub use super::embed_field::Entity as EmbedField;
pub use super::embed_footer::Entity as EmbedFooter;
pub use super::embed_header::Entity as EmbedHeader;
pub use super::embed_images::Entity as EmbedImages;
pub use super::form::Entity as Form;
pub use super::form_post_options::Entity as FormPostOptions;
pub use super::form_prompt::Entity as FormPrompt;
pub use super::form_question::Entity as FormQuestion;
pub use super::form_question_option::Entity as FormQuestionOption;
pub use super::form_question_response::Entity as FormQuestionResponse;
pub use super::form_response_collection::Entity as FormResponseCollection;
pub use super::giveaway::Entity as Giveaway;
pub use super::giveaway_details::Entity as GiveawayDetails;
pub use super::giveaway_entry::Entity as GiveawayEntry;
pub use super::giveaway_manager::Entity as GiveawayManager;
pub use super::glyph_message::Entity as GlyphMessage;
pub use super::guild::Entity as Guild;
pub use super::guild_configuration::Entity as GuildConfiguration;
pub use super::position::Entity as Position;
pub use super::profile::Entity as Profile;
pub use super::profile_additional_image::Entity as ProfileAdditionalImage;
pub use super::profile_at_a_glance::Entity as ProfileAtAGlance;
pub use super::profile_channel_group::Entity as ProfileChannelGroup;
pub use super::profile_details::Entity as ProfileDetails;
pub use super::profile_images::Entity as ProfileImages;
pub use super::profile_manager::Entity as ProfileManager;
pub use super::profile_personality::Entity as ProfilePersonality;
pub use super::profile_requirements::Entity as ProfileRequirements;
pub use super::raffle::Entity as Raffle;
pub use super::raffle_entry::Entity as RaffleEntry;
pub use super::raffle_manager::Entity as RaffleManager;
pub use super::reaction_role::Entity as ReactionRole;
pub use super::reaction_role_manager::Entity as ReactionRoleManager;
pub use super::reaction_role_message::Entity as ReactionRoleMessage;
