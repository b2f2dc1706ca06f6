//! 软件实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "softwares")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub owner_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub release_date: Option<i64>,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::evaluations::Entity")]
    Evaluations,
}

impl Related<super::evaluations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Evaluations.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_software(self) -> crate::models::softwares::entities::Software {
        use crate::models::common::datetime::from_timestamp;
        use crate::models::softwares::entities::Software;

        Software {
            id: self.id,
            owner_id: self.owner_id,
            name: self.name,
            description: self.description,
            release_date: self.release_date.map(from_timestamp),
        }
    }
}
