use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Owned by the profile's images record, keyed by the same profile id.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "profile_additional_images")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub profile_id: i32,
    pub url: String,
    pub caption: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::profile_images::Entity",
        from = "Column::ProfileId",
        to = "super::profile_images::Column::ProfileId",
        on_delete = "Cascade"
    )]
    Images,
}

impl Related<super::profile_images::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Images.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
