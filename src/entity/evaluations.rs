//! 评估实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "evaluations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub software_id: i64,
    pub rubric_id: i64,
    pub owner_id: i64,
    pub total_score: Option<f64>,
    pub average: Option<f64>,
    pub completed: bool,
    pub evaluated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::softwares::Entity",
        from = "Column::SoftwareId",
        to = "super::softwares::Column::Id"
    )]
    Software,
    #[sea_orm(has_many = "super::scores::Entity")]
    Scores,
}

impl Related<super::softwares::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Software.def()
    }
}

impl Related<super::scores::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Scores.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_evaluation(self) -> crate::models::evaluations::entities::Evaluation {
        use crate::models::common::datetime::from_timestamp;
        use crate::models::evaluations::entities::Evaluation;

        Evaluation {
            id: self.id,
            software_id: self.software_id,
            rubric_id: self.rubric_id,
            owner_id: self.owner_id,
            total_score: self.total_score,
            average: self.average,
            completed: self.completed,
            evaluated_at: from_timestamp(self.evaluated_at),
        }
    }
}
