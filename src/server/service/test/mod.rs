use crate::server::{
    data::audit_log::AuditLogRepository,
    error::AppError,
    model::context::MutationContext,
    mutation::{Patch, ResourceKind},
};
use entity::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory, factory::helpers::next_snowflake};

mod embed;
mod form;
mod giveaway;
mod glyph;
mod guild;
mod profile;
mod raffle;
mod reaction_role;

/// Context of a fresh actor acting in `guild_id`.
fn actor_in(guild_id: i64) -> MutationContext {
    MutationContext::new(guild_id, next_snowflake())
}
