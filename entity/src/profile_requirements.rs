use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Which profile sections a guild requires members to fill in.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "profile_requirements")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub guild_id: i64,
    pub url: bool,
    pub color: bool,
    pub jobs: bool,
    pub rates: bool,
    pub gender: bool,
    pub race: bool,
    pub orientation: bool,
    pub height: bool,
    pub age: bool,
    pub mare: bool,
    pub world: bool,
    pub likes: bool,
    pub dislikes: bool,
    pub personality: bool,
    pub aboutme: bool,
    pub thumbnail: bool,
    pub main_image: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::profile_manager::Entity",
        from = "Column::GuildId",
        to = "super::profile_manager::Column::GuildId",
        on_delete = "Cascade"
    )]
    Manager,
}

impl Related<super::profile_manager::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Manager.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
