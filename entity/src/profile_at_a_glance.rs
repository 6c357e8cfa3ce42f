use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "profile_at_a_glances")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub profile_id: i32,
    pub world: Option<i32>,
    pub gender_enum: Option<i32>,
    pub pronouns: Json,
    pub race_enum: Option<i32>,
    pub clan_enum: Option<i32>,
    pub orientation_enum: Option<i32>,
    pub race_custom: Option<String>,
    pub clan_custom: Option<String>,
    pub orientation_custom: Option<String>,
    pub height: Option<i32>,
    pub age: Option<String>,
    pub mare: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::profile::Entity",
        from = "Column::ProfileId",
        to = "super::profile::Column::Id",
        on_delete = "Cascade"
    )]
    Profile,
}

impl Related<super::profile::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Profile.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
