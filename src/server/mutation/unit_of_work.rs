//! Transactional boundary of one mutation.
//!
//! A `UnitOfWork` wraps a database transaction together with the caller's scope and
//! the single audit entry the mutation must produce. Creates, updates and deletes
//! performed through it write their audit entry on the same transaction; a second
//! audited write is refused, and `commit` refuses to commit a unit of work that recorded
//! none. Dropping a unit of work without committing rolls everything back, audit entry
//! included.

use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DatabaseTransaction, EntityTrait, IdenStatic,
    IntoActiveModel, Iterable, TransactionTrait,
};
use serde_json::Map;

use crate::server::{
    error::AppError,
    model::context::MutationContext,
    mutation::{
        audit::{self, AuditOperation, Snapshot},
        cascade, ordering,
        patch::{self, Patch},
        resource::{self, Ordered, Resource, ResourceKind},
    },
};

pub struct UnitOfWork {
    txn: DatabaseTransaction,
    ctx: MutationContext,
    audit: Option<entity::audit_log::Model>,
}

impl UnitOfWork {
    /// Opens a transaction for one mutation.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `ctx` - Guild and acting user of the mutation
    ///
    /// # Returns
    /// - `Ok(UnitOfWork)` - Open unit of work
    /// - `Err(AppError::DbErr)` - Failed to begin the transaction
    pub async fn begin(db: &DatabaseConnection, ctx: MutationContext) -> Result<Self, AppError> {
        let txn = db.begin().await?;

        Ok(Self {
            txn,
            ctx,
            audit: None,
        })
    }

    pub fn context(&self) -> MutationContext {
        self.ctx
    }

    /// Transaction for reads that must see this unit of work's own writes.
    pub fn conn(&self) -> &DatabaseTransaction {
        &self.txn
    }

    /// Loads a resource by key inside the transaction.
    ///
    /// # Returns
    /// - `Ok(R)` - The resource
    /// - `Err(AppError::NotFound)` - No resource with that key
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn find<R: Resource>(&self, key: i64) -> Result<R, AppError> {
        resource::find_by_key::<R, _>(&self.txn, key)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("{} {} not found", R::KIND, key)))
    }

    /// Position a new member of `owner`'s sibling group should take.
    ///
    /// Reads the group under an exclusive lock so the lowest free position stays free
    /// until this unit of work ends.
    pub async fn next_position<R: Ordered>(&self, owner: i64) -> Result<i32, AppError> {
        let siblings = resource::lock_siblings::<R, _>(&self.txn, owner).await?;
        let positions: Vec<i32> = siblings.iter().map(Ordered::position).collect();

        Ok(ordering::next_position(&positions))
    }

    /// Inserts `draft` and records it as the audited Create of this unit of work.
    ///
    /// When the resource's key is generated the draft's key is ignored.
    ///
    /// # Returns
    /// - `Ok(R)` - Inserted resource with its stored key
    /// - `Err(AppError::Conflict)` - A unique constraint rejected the row
    /// - `Err(AppError::InternalError)` - This unit of work is already audited
    pub async fn create<R>(&mut self, draft: R) -> Result<R, AppError>
    where
        R: Resource + IntoActiveModel<R::Active>,
    {
        self.ensure_unaudited()?;

        let created = self.insert(draft).await?;
        self.record(R::KIND, created.key(), AuditOperation::Create, Map::new())
            .await?;

        Ok(created)
    }

    /// Inserts a mandatory attachment of the resource created by this unit of work.
    ///
    /// Attachments are part of their owner's Create and are not audited separately.
    pub async fn attach<R>(&self, draft: R) -> Result<R, AppError>
    where
        R: Resource + IntoActiveModel<R::Active>,
    {
        self.insert(draft).await
    }

    /// Applies `patch` to `current` and records the field diff as the audited Update.
    ///
    /// Only columns whose value changed are written. A patch that changes nothing still
    /// records an Update entry with an empty diff.
    ///
    /// # Arguments
    /// - `current` - Resource as loaded in this unit of work, already scope-checked
    /// - `patch` - Validated sparse update
    ///
    /// # Returns
    /// - `Ok(R)` - Resource after the update
    /// - `Err(AppError::Validation)` - A patch value does not fit its field
    /// - `Err(AppError::InternalError)` - This unit of work is already audited
    pub async fn update<R>(&mut self, current: R, patch: &Patch) -> Result<R, AppError>
    where
        R: Resource + IntoActiveModel<R::Active>,
    {
        self.ensure_unaudited()?;

        let before = Snapshot::capture(&current)?;
        let next = patch::apply(&current, patch)?;
        let changes = audit::diff(&before, &Snapshot::capture(&next)?);

        let updated = if changes.is_empty() {
            current
        } else {
            let mut active: R::Active = next.into_active_model();
            for column in <<R::Table as EntityTrait>::Column as Iterable>::iter() {
                if changes.contains_key(IdenStatic::as_str(&column)) {
                    active.reset(column);
                }
            }
            active.update(&self.txn).await?
        };

        self.record(R::KIND, updated.key(), AuditOperation::Update, changes)
            .await?;

        Ok(updated)
    }

    /// Like `update`, but checks an explicit `sort_order` against the sibling group first.
    ///
    /// # Returns
    /// - `Err(AppError::Conflict)` - Another sibling holds the requested position
    /// - `Err(AppError::Validation)` - Requested position is outside the group
    pub async fn update_ordered<R>(&mut self, current: R, patch: &Patch) -> Result<R, AppError>
    where
        R: Ordered + IntoActiveModel<R::Active>,
    {
        if let Some(requested) = patch.get_i32("sort_order")? {
            let siblings: Vec<(i64, i32)> =
                resource::lock_siblings::<R, _>(&self.txn, current.owner())
                    .await?
                    .iter()
                    .map(|sibling| (sibling.key(), sibling.position()))
                    .collect();

            ordering::check_reposition(&siblings, current.key(), requested)?;
        }

        self.update(current, patch).await
    }

    /// Deletes `target` with its whole subtree and records the audited Delete.
    ///
    /// # Returns
    /// - `Ok(u64)` - Rows removed, `target` included
    /// - `Err(AppError::InternalError)` - This unit of work is already audited
    pub async fn delete<R: Resource>(&mut self, target: R) -> Result<u64, AppError> {
        self.ensure_unaudited()?;

        let removed = cascade::delete_subtree(&self.txn, R::KIND, target.key()).await?;
        self.record(R::KIND, target.key(), AuditOperation::Delete, Map::new())
            .await?;

        Ok(removed)
    }

    /// Commits the mutation together with its audit entry.
    ///
    /// # Returns
    /// - `Ok(audit_log::Model)` - The committed audit entry
    /// - `Err(AppError::InternalError)` - No audited write happened; the transaction is
    ///   rolled back
    /// - `Err(AppError::DbErr)` - Commit failed; nothing was persisted
    pub async fn commit(self) -> Result<entity::audit_log::Model, AppError> {
        let Self { txn, ctx, audit } = self;

        let Some(entry) = audit else {
            txn.rollback().await?;
            return Err(AppError::InternalError(format!(
                "Refusing to commit unaudited mutation in guild {}",
                ctx.guild_id
            )));
        };

        txn.commit().await?;

        Ok(entry)
    }

    /// Discards every write of this unit of work.
    pub async fn rollback(self) -> Result<(), AppError> {
        self.txn.rollback().await?;

        Ok(())
    }

    async fn insert<R>(&self, draft: R) -> Result<R, AppError>
    where
        R: Resource + IntoActiveModel<R::Active>,
    {
        let mut active: R::Active = draft.into_active_model().reset_all();
        if R::GENERATED_KEY {
            active.not_set(R::key_column());
        }

        Ok(active.insert(&self.txn).await?)
    }

    fn ensure_unaudited(&self) -> Result<(), AppError> {
        match &self.audit {
            Some(entry) => Err(AppError::InternalError(format!(
                "Unit of work already audited {} {} {}",
                entry.action, entry.target, entry.target_id
            ))),
            None => Ok(()),
        }
    }

    async fn record(
        &mut self,
        kind: ResourceKind,
        target_id: i64,
        operation: AuditOperation,
        changes: Map<String, serde_json::Value>,
    ) -> Result<(), AppError> {
        self.ensure_unaudited()?;

        let entry = audit::record_change(
            &self.txn,
            self.ctx.guild_id,
            kind,
            target_id,
            operation,
            self.ctx.actor_id,
            changes,
        )
        .await?;
        self.audit = Some(entry);

        Ok(())
    }
}
