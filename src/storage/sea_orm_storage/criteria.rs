use super::{SeaOrmStorage, db_error, ownership_condition};
use crate::entity::criteria::{ActiveModel, Column, Entity as Criteria};
use crate::errors::Result;
use crate::models::{
    OwnershipFilter,
    criteria::{
        entities::Criterion,
        requests::{NewCriterion, UpdateCriterionRequest},
    },
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    pub async fn create_criterion_impl(&self, criterion: NewCriterion) -> Result<Criterion> {
        let model = ActiveModel {
            name: Set(criterion.name),
            category_id: Set(criterion.category_id),
            owner_id: Set(criterion.owner.to_column()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| db_error("创建评价标准失败", e))?;

        Ok(result.into_criterion())
    }

    pub async fn get_criterion_by_id_impl(&self, id: i64) -> Result<Option<Criterion>> {
        let result = Criteria::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| db_error("查询评价标准失败", e))?;

        Ok(result.map(|m| m.into_criterion()))
    }

    pub async fn list_criteria_impl(
        &self,
        scope: OwnershipFilter,
        category_id: Option<i64>,
    ) -> Result<Vec<Criterion>> {
        let mut select = Criteria::find().filter(ownership_condition(Column::OwnerId, scope));

        if let Some(category_id) = category_id {
            select = select.filter(Column::CategoryId.eq(category_id));
        }

        let criteria = select
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| db_error("查询评价标准列表失败", e))?;

        Ok(criteria.into_iter().map(|m| m.into_criterion()).collect())
    }

    pub async fn list_criteria_in_category_impl(
        &self,
        category_id: i64,
        criterion_ids: &[i64],
    ) -> Result<Vec<Criterion>> {
        if criterion_ids.is_empty() {
            return Ok(Vec::new());
        }

        let criteria = Criteria::find()
            .filter(Column::CategoryId.eq(category_id))
            .filter(Column::Id.is_in(criterion_ids.iter().copied()))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| db_error("查询评价标准列表失败", e))?;

        Ok(criteria.into_iter().map(|m| m.into_criterion()).collect())
    }

    pub async fn update_criterion_impl(
        &self,
        id: i64,
        update: UpdateCriterionRequest,
    ) -> Result<Option<Criterion>> {
        let Some(existing) = Criteria::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| db_error("查询评价标准失败", e))?
        else {
            return Ok(None);
        };

        let mut model: ActiveModel = existing.clone().into();

        if let Some(name) = update.name {
            model.name = Set(name);
        }
        if let Some(category_id) = update.category_id {
            model.category_id = Set(category_id);
        }
        if let Some(owner) = update.owner {
            model.owner_id = Set(owner.to_column());
        }

        if !model.is_changed() {
            return Ok(Some(existing.into_criterion()));
        }

        let updated = model
            .update(&self.db)
            .await
            .map_err(|e| db_error("更新评价标准失败", e))?;

        Ok(Some(updated.into_criterion()))
    }

    pub async fn delete_criterion_impl(&self, id: i64) -> Result<bool> {
        let result = Criteria::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| db_error("删除评价标准失败", e))?;

        Ok(result.rows_affected > 0)
    }
}
