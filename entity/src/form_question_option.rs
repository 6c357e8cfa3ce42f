use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Ordered within its question by `sort_order`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "form_question_options")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub question_id: i32,
    pub label: Option<String>,
    pub description: Option<String>,
    pub value: Option<String>,
    pub emoji: Option<String>,
    pub sort_order: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::form_question::Entity",
        from = "Column::QuestionId",
        to = "super::form_question::Column::Id",
        on_delete = "Cascade"
    )]
    Question,
}

impl Related<super::form_question::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Question.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
