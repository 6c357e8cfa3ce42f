use crate::server::{
    data::audit_log::AuditLogRepository,
    error::AppError,
    mutation::{audit, audit::AuditOperation, ResourceKind},
};
use serde_json::Map;
use test_utils::{builder::TestBuilder, factory};

mod list_for_guild;
mod list_for_target;
