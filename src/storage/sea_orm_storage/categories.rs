use super::{SeaOrmStorage, db_error};
use crate::entity::categories::{ActiveModel, Column, Entity as Categories};
use crate::errors::Result;
use crate::models::categories::{
    entities::Category,
    requests::{CreateCategoryRequest, UpdateCategoryRequest},
};
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};

impl SeaOrmStorage {
    pub async fn create_category_impl(&self, req: CreateCategoryRequest) -> Result<Category> {
        let model = ActiveModel {
            name: Set(req.name),
            description: Set(req.description),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| db_error("创建分类失败", e))?;

        Ok(result.into_category())
    }

    pub async fn get_category_by_id_impl(&self, id: i64) -> Result<Option<Category>> {
        let result = Categories::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| db_error("查询分类失败", e))?;

        Ok(result.map(|m| m.into_category()))
    }

    pub async fn list_categories_impl(&self) -> Result<Vec<Category>> {
        let categories = Categories::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| db_error("查询分类列表失败", e))?;

        Ok(categories.into_iter().map(|m| m.into_category()).collect())
    }

    pub async fn update_category_impl(
        &self,
        id: i64,
        update: UpdateCategoryRequest,
    ) -> Result<Option<Category>> {
        let Some(existing) = Categories::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| db_error("查询分类失败", e))?
        else {
            return Ok(None);
        };

        let mut model: ActiveModel = existing.clone().into();

        if let Some(name) = update.name {
            model.name = Set(name);
        }
        if let Some(description) = update.description {
            model.description = Set(Some(description));
        }

        if !model.is_changed() {
            return Ok(Some(existing.into_category()));
        }

        let updated = model
            .update(&self.db)
            .await
            .map_err(|e| db_error("更新分类失败", e))?;

        Ok(Some(updated.into_category()))
    }

    pub async fn delete_category_impl(&self, id: i64) -> Result<bool> {
        let result = Categories::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| db_error("删除分类失败", e))?;

        Ok(result.rows_affected > 0)
    }
}
