//! Ownership checks between a caller's stated scope and a loaded resource.

use std::fmt::Debug;

use crate::server::{error::AppError, mutation::resource::ResourceKind};

/// Verifies that a loaded resource belongs to the scope the caller declared.
///
/// Called after every lookup-by-id and before any mutation, once per level of the
/// ownership chain: the first level compares the caller's guild against the resource's
/// guild, deeper levels compare the already-verified parent's id against the child's
/// owner reference. A mismatch means the resource exists but not under that scope, so it
/// is reported as `Forbidden` rather than `NotFound`.
///
/// # Arguments
/// - `kind` - Kind of the resource being checked, for the error message
/// - `expected` - Owner id declared by the calling context
/// - `actual` - Owner id stored on the loaded resource
///
/// # Returns
/// - `Ok(())` - Owner ids are equal
/// - `Err(AppError::Forbidden)` - Resource is owned by a different scope
pub fn verify_scope<T>(kind: ResourceKind, expected: T, actual: T) -> Result<(), AppError>
where
    T: PartialEq + Debug,
{
    if expected == actual {
        return Ok(());
    }

    tracing::warn!(
        target_kind = %kind,
        ?expected,
        ?actual,
        "Rejected mutation outside the caller's scope"
    );

    Err(AppError::Forbidden(format!(
        "{} does not belong to {:?}",
        kind, expected
    )))
}
