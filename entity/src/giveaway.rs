use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "giveaways")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub guild_id: i64,
    pub winners: Json,
    pub post_url: Option<String>,
    pub rolled_at: Option<DateTimeUtc>,
    pub rolled_by: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::giveaway_manager::Entity",
        from = "Column::GuildId",
        to = "super::giveaway_manager::Column::GuildId",
        on_delete = "Cascade"
    )]
    Manager,
}

impl Related<super::giveaway_manager::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Manager.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
