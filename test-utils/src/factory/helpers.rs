//! Shared helper utilities for factory methods.

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Gets the next unique counter value as a Discord-style snowflake.
///
/// Offset so generated guild, user and channel ids never collide with the small
/// integer keys SQLite assigns to auto-increment rows.
///
/// # Returns
/// - `i64` - Next unique snowflake
pub fn next_snowflake() -> i64 {
    100_000_000_000_000_000 + next_id() as i64
}
