//! 标准得分实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "scores")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub rubric_id: i64,
    pub criterion_id: i64,
    pub evaluation_id: i64,
    pub owner_id: i64,
    pub value: f64,
    pub scored_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::evaluations::Entity",
        from = "Column::EvaluationId",
        to = "super::evaluations::Column::Id"
    )]
    Evaluation,
}

impl Related<super::evaluations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Evaluation.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_score(self) -> crate::models::scores::entities::Score {
        use crate::models::common::datetime::from_timestamp;
        use crate::models::scores::entities::Score;

        Score {
            id: self.id,
            rubric_id: self.rubric_id,
            criterion_id: self.criterion_id,
            evaluation_id: self.evaluation_id,
            owner_id: self.owner_id,
            value: self.value,
            scored_at: from_timestamp(self.scored_at),
        }
    }
}
