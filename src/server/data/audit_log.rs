//! Audit log data repository.
//!
//! Entries are append-only; this repository only reads them. Entries are written by
//! `mutation::audit::record_change` inside the unit of work of the mutation they describe.

use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::server::mutation::ResourceKind;

/// Repository providing read access to the audit trail.
pub struct AuditLogRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuditLogRepository<'a> {
    /// Creates a new AuditLogRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `AuditLogRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every audit entry recorded under a guild, oldest first.
    ///
    /// Includes entries whose targets have since been deleted.
    ///
    /// # Arguments
    /// - `guild_id` - Guild the mutations ran under
    ///
    /// # Returns
    /// - `Ok(Vec<audit_log::Model>)` - Entries in insertion order
    /// - `Err(DbErr)` - Database error during query
    pub async fn list_for_guild(
        &self,
        guild_id: i64,
    ) -> Result<Vec<entity::audit_log::Model>, DbErr> {
        entity::prelude::AuditLog::find()
            .filter(entity::audit_log::Column::GuildId.eq(guild_id))
            .order_by_asc(entity::audit_log::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets the history of one resource, oldest first.
    ///
    /// # Arguments
    /// - `kind` - Type of the resource
    /// - `target_id` - Key of the resource
    ///
    /// # Returns
    /// - `Ok(Vec<audit_log::Model>)` - Entries in insertion order
    /// - `Err(DbErr)` - Database error during query
    pub async fn list_for_target(
        &self,
        kind: ResourceKind,
        target_id: i64,
    ) -> Result<Vec<entity::audit_log::Model>, DbErr> {
        entity::prelude::AuditLog::find()
            .filter(entity::audit_log::Column::Target.eq(kind.as_str()))
            .filter(entity::audit_log::Column::TargetId.eq(target_id))
            .order_by_asc(entity::audit_log::Column::Id)
            .all(self.db)
            .await
    }
}
