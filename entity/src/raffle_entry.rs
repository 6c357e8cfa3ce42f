use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "raffle_entries")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub raffle_id: i32,
    pub user_id: i64,
    pub quantity: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::raffle::Entity",
        from = "Column::RaffleId",
        to = "super::raffle::Column::Id",
        on_delete = "Cascade"
    )]
    Raffle,
}

impl Related<super::raffle::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Raffle.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
