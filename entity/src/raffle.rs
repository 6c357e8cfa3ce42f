use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "raffles")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub guild_id: i64,
    pub winners: Json,
    pub is_active: bool,
    pub post_url: Option<String>,
    pub name: Option<String>,
    pub prize: Option<String>,
    pub num_winners: i32,
    pub auto_notify: bool,
    pub cost: i32,
    pub rolled_at: Option<DateTimeUtc>,
    pub rolled_by: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::raffle_manager::Entity",
        from = "Column::GuildId",
        to = "super::raffle_manager::Column::GuildId",
        on_delete = "Cascade"
    )]
    Manager,
}

impl Related<super::raffle_manager::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Manager.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
