//! Field-level audit diffs.
//!
//! Diffs are computed by explicit snapshot comparison: the prior state is captured as a
//! plain JSON object when the resource is loaded and compared against the final state
//! before the write. Nothing depends on ORM-level dirty tracking.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait};
use serde::Serialize;
use serde_json::{json, Map, Value};

use crate::server::{error::AppError, mutation::resource::ResourceKind};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuditOperation {
    Create,
    Update,
    Delete,
}

impl AuditOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Create => "Create",
            Self::Update => "Update",
            Self::Delete => "Delete",
        }
    }
}

/// Plain copy of a resource's attribute values at one point in time.
#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot(Map<String, Value>);

impl Snapshot {
    /// Captures every serialized attribute of `model`.
    ///
    /// # Returns
    /// - `Ok(Snapshot)` - Attribute map keyed by column name
    /// - `Err(AppError::InternalError)` - Model does not serialize to an object
    pub fn capture<M: Serialize>(model: &M) -> Result<Self, AppError> {
        match serde_json::to_value(model)? {
            Value::Object(fields) => Ok(Self(fields)),
            other => Err(AppError::InternalError(format!(
                "Cannot snapshot non-object value: {}",
                other
            ))),
        }
    }
}

/// Compares two snapshots of the same resource.
///
/// Every attribute whose value differs is keyed by name to `{"old": .., "new": ..}`.
/// Unchanged attributes are omitted, so identical snapshots give an empty map.
pub fn diff(before: &Snapshot, after: &Snapshot) -> Map<String, Value> {
    let mut changes = Map::new();

    for (field, new) in &after.0 {
        let old = before.0.get(field).unwrap_or(&Value::Null);
        if old != new {
            changes.insert(field.clone(), json!({ "old": old, "new": new }));
        }
    }

    for (field, old) in &before.0 {
        if !after.0.contains_key(field) {
            changes.insert(field.clone(), json!({ "old": old, "new": Value::Null }));
        }
    }

    changes
}

/// Persists one audit entry.
///
/// Must run on the same transaction as the mutation it describes so both commit or
/// both roll back. `UnitOfWork` calls this exactly once per mutation; calling it directly
/// is for callers managing their own transaction.
///
/// # Arguments
/// - `conn` - Open transaction of the mutation
/// - `guild_id` - Tenant the mutation ran under
/// - `kind` - Type of the mutated resource
/// - `target_id` - Key of the mutated resource (the root, for cascading deletes)
/// - `operation` - Create, Update or Delete
/// - `actor_id` - Acting user
/// - `changes` - Output of `diff`; empty for Create and Delete
///
/// # Returns
/// - `Ok(audit_log::Model)` - The stored entry
/// - `Err(AppError::DbErr)` - Insert failed
pub async fn record_change<C>(
    conn: &C,
    guild_id: i64,
    kind: ResourceKind,
    target_id: i64,
    operation: AuditOperation,
    actor_id: i64,
    changes: Map<String, Value>,
) -> Result<entity::audit_log::Model, AppError>
where
    C: ConnectionTrait,
{
    let entry = entity::audit_log::ActiveModel {
        id: ActiveValue::NotSet,
        guild_id: ActiveValue::Set(guild_id),
        target: ActiveValue::Set(kind.as_str().to_string()),
        target_id: ActiveValue::Set(target_id),
        action: ActiveValue::Set(operation.as_str().to_string()),
        user_id: ActiveValue::Set(actor_id),
        changes: ActiveValue::Set(Value::Object(changes)),
        created_at: ActiveValue::Set(Utc::now()),
    }
    .insert(conn)
    .await?;

    tracing::debug!(
        guild_id,
        actor_id,
        target = %kind,
        target_id,
        action = operation.as_str(),
        "Recorded audit entry"
    );

    Ok(entry)
}
