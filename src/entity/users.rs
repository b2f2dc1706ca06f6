//! 用户实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub first_name: String,
    pub paternal_surname: String,
    pub maternal_surname: String,
    #[sea_orm(unique)]
    pub username: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    pub role: i32,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_user(self) -> crate::models::users::entities::User {
        use crate::models::common::datetime::from_timestamp;
        use crate::models::users::entities::{User, UserRole};

        User {
            id: self.id,
            first_name: self.first_name,
            paternal_surname: self.paternal_surname,
            maternal_surname: self.maternal_surname,
            username: self.username,
            email: self.email,
            password_hash: self.password_hash,
            // 未知角色按普通用户处理
            role: UserRole::from_code(self.role).unwrap_or(UserRole::Standard),
            created_at: from_timestamp(self.created_at),
        }
    }
}
