use super::{SeaOrmStorage, db_error, ownership_condition};
use crate::entity::questions::{ActiveModel, Column, Entity as Questions};
use crate::errors::Result;
use crate::models::{
    OwnershipFilter,
    questions::{
        entities::Question,
        requests::{NewQuestion, UpdateQuestionRequest},
    },
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    pub async fn create_question_impl(&self, question: NewQuestion) -> Result<Question> {
        let model = ActiveModel {
            text: Set(question.text),
            criterion_id: Set(question.criterion_id),
            rubric_id: Set(question.rubric_id),
            owner_id: Set(question.owner.to_column()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| db_error("创建问题失败", e))?;

        Ok(result.into_question())
    }

    pub async fn get_question_by_id_impl(&self, id: i64) -> Result<Option<Question>> {
        let result = Questions::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| db_error("查询问题失败", e))?;

        Ok(result.map(|m| m.into_question()))
    }

    pub async fn list_questions_impl(
        &self,
        scope: OwnershipFilter,
        criterion_id: Option<i64>,
    ) -> Result<Vec<Question>> {
        let mut select = Questions::find().filter(ownership_condition(Column::OwnerId, scope));

        if let Some(criterion_id) = criterion_id {
            select = select.filter(Column::CriterionId.eq(criterion_id));
        }

        let questions = select
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| db_error("查询问题列表失败", e))?;

        Ok(questions.into_iter().map(|m| m.into_question()).collect())
    }

    pub async fn update_question_impl(
        &self,
        id: i64,
        update: UpdateQuestionRequest,
    ) -> Result<Option<Question>> {
        let Some(existing) = Questions::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| db_error("查询问题失败", e))?
        else {
            return Ok(None);
        };

        let mut model: ActiveModel = existing.clone().into();

        if let Some(text) = update.text {
            model.text = Set(text);
        }
        if let Some(criterion_id) = update.criterion_id {
            model.criterion_id = Set(criterion_id);
        }
        if let Some(rubric_id) = update.rubric_id {
            model.rubric_id = Set(Some(rubric_id));
        }

        if !model.is_changed() {
            return Ok(Some(existing.into_question()));
        }

        let updated = model
            .update(&self.db)
            .await
            .map_err(|e| db_error("更新问题失败", e))?;

        Ok(Some(updated.into_question()))
    }

    pub async fn delete_question_impl(&self, id: i64) -> Result<bool> {
        let result = Questions::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| db_error("删除问题失败", e))?;

        Ok(result.rows_affected > 0)
    }
}
