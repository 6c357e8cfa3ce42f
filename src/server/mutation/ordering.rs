//! Dense ordering within sibling groups.
//!
//! Positions in a group are zero-based. Creates take the lowest free position so a hole
//! left by a delete is refilled before the group grows. Explicit repositioning never
//! shifts other siblings; it is rejected when the target position is taken.

use crate::server::error::AppError;

/// Returns the position a new sibling should take.
///
/// Scans the sorted positions and returns the first index whose value differs from the
/// index; when the group has no hole this is `existing.len()`.
///
/// # Arguments
/// - `existing` - Current positions of the group, in any order
///
/// # Returns
/// - `i32` - Lowest position that keeps the group contiguous from 0
pub fn next_position(existing: &[i32]) -> i32 {
    let mut sorted = existing.to_vec();
    sorted.sort_unstable();
    sorted.dedup();

    let mut next = 0;
    for position in sorted {
        if position != next {
            break;
        }
        next += 1;
    }

    next
}

/// Checks a caller-supplied position for an existing sibling.
///
/// Restating the mover's own position always passes. Otherwise the position must be
/// free and no higher than the group's last position, which is the larger of its
/// highest occupied position and `siblings.len() - 1`, so holes left by deletes never
/// shrink the range.
///
/// # Arguments
/// - `siblings` - `(key, position)` of every member of the group, including the mover
/// - `moving` - Key of the sibling being repositioned
/// - `requested` - New position
///
/// # Returns
/// - `Ok(())` - Position is free or already held by the mover
/// - `Err(AppError::Conflict)` - Another sibling holds `requested`
/// - `Err(AppError::Validation)` - `requested` is negative or past the last position
pub fn check_reposition(
    siblings: &[(i64, i32)],
    moving: i64,
    requested: i32,
) -> Result<(), AppError> {
    if siblings
        .iter()
        .any(|(key, position)| *key == moving && *position == requested)
    {
        return Ok(());
    }

    if let Some((holder, _)) = siblings
        .iter()
        .find(|(key, position)| *position == requested && *key != moving)
    {
        return Err(AppError::Conflict(format!(
            "Position {} is already held by {}",
            requested, holder
        )));
    }

    let size = i32::try_from(siblings.len()).unwrap_or(i32::MAX);
    let last = siblings
        .iter()
        .map(|(_, position)| *position)
        .max()
        .unwrap_or(0)
        .max(size - 1);
    if requested < 0 || requested > last {
        return Err(AppError::Validation(format!(
            "Position {} is outside 0..={}",
            requested, last
        )));
    }

    Ok(())
}
