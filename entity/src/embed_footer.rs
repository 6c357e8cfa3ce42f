use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "embed_footers")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub embed_id: i32,
    pub text: Option<String>,
    pub icon_url: Option<String>,
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
