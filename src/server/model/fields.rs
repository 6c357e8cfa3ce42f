//! Mutable fields of each resource.
//!
//! Keys, owner references and server-assigned values (`user_id`, `last_edited`,
//! `submitted_at`) are never listed. `sort_order` is listed for ordered resources so it
//! can be repositioned on update; creates always assign it.

pub const GUILD_CONFIGURATION: &[&str] = &["timezone", "log_channel_id"];

pub const EMBED: &[&str] = &["title", "description", "color", "url", "timestamp"];
pub const EMBED_IMAGES: &[&str] = &["thumbnail_url", "main_image_url"];
pub const EMBED_HEADER: &[&str] = &["text", "icon_url", "url"];
pub const EMBED_FOOTER: &[&str] = &["text", "icon_url"];
pub const EMBED_FIELD: &[&str] = &["name", "value", "inline", "sort_order"];

pub const FORM: &[&str] = &[
    "name",
    "create_channel",
    "channel_roles",
    "creation_category",
    "post_url",
    "notify_roles",
    "notify_users",
];
pub const FORM_POST_OPTIONS: &[&str] = &[
    "description",
    "thumbnail_url",
    "color",
    "button_label",
    "button_emoji",
    "channel_id",
];
pub const FORM_PROMPT: &[&str] = &[
    "title",
    "description",
    "thumbnail_url",
    "show_cancel",
    "is_active",
];
pub const FORM_QUESTION: &[&str] = &[
    "sort_order",
    "primary_text",
    "secondary_text",
    "ui_type",
    "required",
];
pub const FORM_QUESTION_OPTION: &[&str] =
    &["label", "description", "value", "emoji", "sort_order"];
pub const FORM_QUESTION_RESPONSE: &[&str] = &["values"];
pub const FORM_RESPONSE_COLLECTION: &[&str] = &["data"];

pub const GIVEAWAY_MANAGER: &[&str] = &["channel_id"];
pub const GIVEAWAY: &[&str] = &["winners", "post_url", "rolled_at", "rolled_by"];
pub const GIVEAWAY_DETAILS: &[&str] = &[
    "name",
    "prize",
    "num_winners",
    "auto_notify",
    "description",
    "thumbnail_url",
    "color",
    "end_dt",
    "emoji",
];

pub const RAFFLE_MANAGER: &[&str] = &["channel_id"];
pub const RAFFLE: &[&str] = &[
    "winners",
    "is_active",
    "post_url",
    "name",
    "prize",
    "num_winners",
    "auto_notify",
    "cost",
    "rolled_at",
    "rolled_by",
];
pub const RAFFLE_ENTRY: &[&str] = &["quantity"];

pub const REACTION_ROLE_MANAGER: &[&str] = &["channel_id"];
pub const REACTION_ROLE_MESSAGE: &[&str] = &[
    "title",
    "description",
    "thumbnail_url",
    "post_url",
    "msg_type",
    "type_param",
    "color",
];
pub const REACTION_ROLE: &[&str] = &["role_id", "emoji", "label"];

pub const PROFILE_REQUIREMENTS: &[&str] = &[
    "url",
    "color",
    "jobs",
    "rates",
    "gender",
    "race",
    "orientation",
    "height",
    "age",
    "mare",
    "world",
    "likes",
    "dislikes",
    "personality",
    "aboutme",
    "thumbnail",
    "main_image",
];
pub const PROFILE: &[&str] = &["post_url"];
pub const PROFILE_DETAILS: &[&str] = &["name", "custom_url", "color", "jobs", "rates"];
pub const PROFILE_AT_A_GLANCE: &[&str] = &[
    "world",
    "gender_enum",
    "pronouns",
    "race_enum",
    "clan_enum",
    "orientation_enum",
    "race_custom",
    "clan_custom",
    "orientation_custom",
    "height",
    "age",
    "mare",
];
pub const PROFILE_PERSONALITY: &[&str] = &["likes", "dislikes", "personality", "aboutme"];
pub const PROFILE_IMAGES: &[&str] = &["thumbnail_url", "main_image_url"];
pub const PROFILE_ADDITIONAL_IMAGE: &[&str] = &["url", "caption"];
pub const PROFILE_CHANNEL_GROUP: &[&str] = &["channel_ids", "role_ids"];

pub const POSITION: &[&str] = &["name", "role_id"];
pub const GLYPH_MESSAGE: &[&str] = &["name", "message"];
