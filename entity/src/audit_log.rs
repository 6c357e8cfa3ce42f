use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Append-only record of one mutation.
///
/// Carries no foreign key to its target or guild; entries outlive
/// the resources they describe.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "audit_log")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub guild_id: i64,
    pub target: String,
    pub target_id: i64,
    pub action: String,
    pub user_id: i64,
    pub changes: Json,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
