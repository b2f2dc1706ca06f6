use super::{SeaOrmStorage, db_error, ownership_condition};
use crate::entity::rubrics::{ActiveModel, Column, Entity as Rubrics, Model};
use crate::errors::Result;
use crate::models::{
    OwnershipFilter,
    rubrics::{
        entities::Rubric,
        requests::{NewRubric, UpdateRubricRequest},
    },
};
use sea_orm::{ActiveModelTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    pub async fn create_rubric_impl(&self, rubric: NewRubric) -> Result<Rubric> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            name: Set(rubric.name),
            owner_id: Set(rubric.owner.to_column()),
            category_ids: Set(serde_json::to_string(&rubric.category_ids)?),
            criterion_ids: Set(serde_json::to_string(&rubric.criterion_ids)?),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| db_error("创建评分表失败", e))?;

        result.into_rubric()
    }

    pub async fn get_rubric_by_id_impl(&self, id: i64) -> Result<Option<Rubric>> {
        let result = Rubrics::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| db_error("查询评分表失败", e))?;

        result.map(Model::into_rubric).transpose()
    }

    /// 通用评分表的 owner_id 为 NULL，因此会随公共资源一起返回
    pub async fn list_rubrics_impl(&self, scope: OwnershipFilter) -> Result<Vec<Rubric>> {
        let rubrics = Rubrics::find()
            .filter(ownership_condition(Column::OwnerId, scope))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| db_error("查询评分表列表失败", e))?;

        rubrics.into_iter().map(Model::into_rubric).collect()
    }

    pub async fn update_rubric_impl(
        &self,
        id: i64,
        update: UpdateRubricRequest,
    ) -> Result<Option<Rubric>> {
        let Some(existing) = Rubrics::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| db_error("查询评分表失败", e))?
        else {
            return Ok(None);
        };

        let mut model: ActiveModel = existing.clone().into();

        if let Some(name) = update.name {
            model.name = Set(name);
        }
        if let Some(category_ids) = update.category_ids {
            model.category_ids = Set(serde_json::to_string(&category_ids)?);
        }
        if let Some(criterion_ids) = update.criterion_ids {
            model.criterion_ids = Set(serde_json::to_string(&criterion_ids)?);
        }

        if !model.is_changed() {
            return existing.into_rubric().map(Some);
        }
        model.updated_at = Set(chrono::Utc::now().timestamp());

        let updated = model
            .update(&self.db)
            .await
            .map_err(|e| db_error("更新评分表失败", e))?;

        updated.into_rubric().map(Some)
    }

    pub async fn delete_rubric_impl(&self, id: i64) -> Result<bool> {
        let result = Rubrics::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| db_error("删除评分表失败", e))?;

        Ok(result.rows_affected > 0)
    }
}
