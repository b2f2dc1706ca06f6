use super::{SeaOrmStorage, db_error, ownership_condition};
use crate::entity::evaluations::{ActiveModel, Column, Entity as Evaluations};
use crate::errors::Result;
use crate::models::{
    OwnershipFilter,
    evaluations::{
        entities::Evaluation,
        requests::{NewEvaluation, UpdateEvaluationRequest},
    },
};
use sea_orm::{ActiveModelTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    pub async fn create_evaluation_impl(&self, evaluation: NewEvaluation) -> Result<Evaluation> {
        let model = ActiveModel {
            software_id: Set(evaluation.software_id),
            rubric_id: Set(evaluation.rubric_id),
            owner_id: Set(evaluation.owner_id),
            total_score: Set(evaluation.total_score),
            average: Set(evaluation.average),
            completed: Set(evaluation.completed),
            evaluated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| db_error("创建评估失败", e))?;

        Ok(result.into_evaluation())
    }

    pub async fn get_evaluation_by_id_impl(&self, id: i64) -> Result<Option<Evaluation>> {
        let result = Evaluations::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| db_error("查询评估失败", e))?;

        Ok(result.map(|m| m.into_evaluation()))
    }

    pub async fn list_evaluations_impl(&self, scope: OwnershipFilter) -> Result<Vec<Evaluation>> {
        let evaluations = Evaluations::find()
            .filter(ownership_condition(Column::OwnerId, scope))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| db_error("查询评估列表失败", e))?;

        Ok(evaluations.into_iter().map(|m| m.into_evaluation()).collect())
    }

    pub async fn update_evaluation_impl(
        &self,
        id: i64,
        update: UpdateEvaluationRequest,
    ) -> Result<Option<Evaluation>> {
        let Some(existing) = Evaluations::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| db_error("查询评估失败", e))?
        else {
            return Ok(None);
        };

        let mut model: ActiveModel = existing.clone().into();

        if let Some(software_id) = update.software_id {
            model.software_id = Set(software_id);
        }
        if let Some(rubric_id) = update.rubric_id {
            model.rubric_id = Set(rubric_id);
        }
        if let Some(total_score) = update.total_score {
            model.total_score = Set(Some(total_score));
        }
        if let Some(average) = update.average {
            model.average = Set(Some(average));
        }
        if let Some(completed) = update.completed {
            model.completed = Set(completed);
        }

        if !model.is_changed() {
            return Ok(Some(existing.into_evaluation()));
        }

        let updated = model
            .update(&self.db)
            .await
            .map_err(|e| db_error("更新评估失败", e))?;

        Ok(Some(updated.into_evaluation()))
    }

    pub async fn delete_evaluation_impl(&self, id: i64) -> Result<bool> {
        let result = Evaluations::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| db_error("删除评估失败", e))?;

        Ok(result.rows_affected > 0)
    }
}
