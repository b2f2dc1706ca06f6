use super::{SeaOrmStorage, db_error, ownership_condition};
use crate::entity::softwares::{ActiveModel, Column, Entity as Softwares};
use crate::errors::Result;
use crate::models::{
    OwnershipFilter,
    softwares::{
        entities::Software,
        requests::{NewSoftware, UpdateSoftwareRequest},
    },
};
use sea_orm::{ActiveModelTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    pub async fn create_software_impl(&self, software: NewSoftware) -> Result<Software> {
        let model = ActiveModel {
            owner_id: Set(software.owner_id),
            name: Set(software.name),
            description: Set(software.description),
            release_date: Set(software.release_date.map(|d| d.timestamp())),
            created_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| db_error("创建软件失败", e))?;

        Ok(result.into_software())
    }

    pub async fn get_software_by_id_impl(&self, id: i64) -> Result<Option<Software>> {
        let result = Softwares::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| db_error("查询软件失败", e))?;

        Ok(result.map(|m| m.into_software()))
    }

    pub async fn list_softwares_impl(&self, scope: OwnershipFilter) -> Result<Vec<Software>> {
        let softwares = Softwares::find()
            .filter(ownership_condition(Column::OwnerId, scope))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| db_error("查询软件列表失败", e))?;

        Ok(softwares.into_iter().map(|m| m.into_software()).collect())
    }

    pub async fn update_software_impl(
        &self,
        id: i64,
        update: UpdateSoftwareRequest,
    ) -> Result<Option<Software>> {
        let Some(existing) = Softwares::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| db_error("查询软件失败", e))?
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
        if let Some(release_date) = update.release_date {
            model.release_date = Set(Some(release_date.timestamp()));
        }

        if !model.is_changed() {
            return Ok(Some(existing.into_software()));
        }

        let updated = model
            .update(&self.db)
            .await
            .map_err(|e| db_error("更新软件失败", e))?;

        Ok(Some(updated.into_software()))
    }

    pub async fn delete_software_impl(&self, id: i64) -> Result<bool> {
        let result = Softwares::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| db_error("删除软件失败", e))?;

        Ok(result.rows_affected > 0)
    }
}
