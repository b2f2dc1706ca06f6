use super::{SeaOrmStorage, db_error, ownership_condition};
use crate::entity::scores::{ActiveModel, Column, Entity as Scores};
use crate::errors::Result;
use crate::models::{
    OwnershipFilter,
    scores::{
        entities::Score,
        requests::{NewScore, UpdateScoreRequest},
    },
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    pub async fn create_score_impl(&self, score: NewScore) -> Result<Score> {
        let model = ActiveModel {
            rubric_id: Set(score.rubric_id),
            criterion_id: Set(score.criterion_id),
            evaluation_id: Set(score.evaluation_id),
            owner_id: Set(score.owner_id),
            value: Set(score.value),
            scored_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| db_error("创建得分失败", e))?;

        Ok(result.into_score())
    }

    pub async fn get_score_by_id_impl(&self, id: i64) -> Result<Option<Score>> {
        let result = Scores::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| db_error("查询得分失败", e))?;

        Ok(result.map(|m| m.into_score()))
    }

    pub async fn list_scores_impl(&self, scope: OwnershipFilter) -> Result<Vec<Score>> {
        let scores = Scores::find()
            .filter(ownership_condition(Column::OwnerId, scope))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| db_error("查询得分列表失败", e))?;

        Ok(scores.into_iter().map(|m| m.into_score()).collect())
    }

    pub async fn list_scores_by_evaluation_impl(&self, evaluation_id: i64) -> Result<Vec<Score>> {
        let scores = Scores::find()
            .filter(Column::EvaluationId.eq(evaluation_id))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| db_error("查询评估得分失败", e))?;

        Ok(scores.into_iter().map(|m| m.into_score()).collect())
    }

    pub async fn update_score_impl(
        &self,
        id: i64,
        update: UpdateScoreRequest,
    ) -> Result<Option<Score>> {
        let Some(existing) = Scores::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| db_error("查询得分失败", e))?
        else {
            return Ok(None);
        };

        let mut model: ActiveModel = existing.clone().into();

        if let Some(rubric_id) = update.rubric_id {
            model.rubric_id = Set(rubric_id);
        }
        if let Some(criterion_id) = update.criterion_id {
            model.criterion_id = Set(criterion_id);
        }
        if let Some(evaluation_id) = update.evaluation_id {
            model.evaluation_id = Set(evaluation_id);
        }
        if let Some(value) = update.value {
            model.value = Set(value);
        }

        if !model.is_changed() {
            return Ok(Some(existing.into_score()));
        }

        let updated = model
            .update(&self.db)
            .await
            .map_err(|e| db_error("更新得分失败", e))?;

        Ok(Some(updated.into_score()))
    }

    pub async fn delete_score_impl(&self, id: i64) -> Result<bool> {
        let result = Scores::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| db_error("删除得分失败", e))?;

        Ok(result.rows_affected > 0)
    }
}
