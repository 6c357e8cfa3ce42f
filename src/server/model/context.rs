/// Tenant and acting user of one mutation.
///
/// Built by the HTTP layer from the authenticated request and passed to every service
/// operation. The guild id is the first link of every ownership chain; the actor id is
/// recorded on the audit entry and used as `user_id` for member-owned records.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MutationContext {
    pub guild_id: i64,
    pub actor_id: i64,
}

impl MutationContext {
    pub fn new(guild_id: i64, actor_id: i64) -> Self {
        Self { guild_id, actor_id }
    }
}
