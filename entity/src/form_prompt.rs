use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Pre (`prompt_type` 0) or post (1) prompt owned by either a form or a question,
/// never both.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "form_prompts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub form_id: Option<i32>,
    pub question_id: Option<i32>,
    pub prompt_type: i32,
    pub title: Option<String>,
    pub description: Option<String>,
    pub thumbnail_url: Option<String>,
    pub show_cancel: bool,
    pub is_active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::form::Entity",
        from = "Column::FormId",
        to = "super::form::Column::Id",
        on_delete = "Cascade"
    )]
    Form,
    #[sea_orm(
        belongs_to = "super::form_question::Entity",
        from = "Column::QuestionId",
        to = "super::form_question::Column::Id",
        on_delete = "Cascade"
    )]
    Question,
}

impl Related<super::form::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Form.def()
    }
}

impl Related<super::form_question::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Question.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
