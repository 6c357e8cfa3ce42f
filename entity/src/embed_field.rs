use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Ordered within its embed by `sort_order`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "embed_fields")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub embed_id: i32,
    pub name: Option<String>,
    pub value: Option<String>,
    pub inline: bool,
    pub sort_order: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::embed::Entity",
        from = "Column::EmbedId",
        to = "super::embed::Column::Id",
        on_delete = "Cascade"
    )]
    Embed,
}

impl Related<super::embed::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Embed.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
