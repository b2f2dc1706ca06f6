//! 评分表实体
//!
//! 分类与标准的选择以 JSON 数组保存在文本列中，保留顺序。

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "rubrics")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub owner_id: Option<i64>,
    #[sea_orm(column_type = "Text")]
    pub category_ids: String,
    #[sea_orm(column_type = "Text")]
    pub criterion_ids: String,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_rubric(self) -> crate::errors::Result<crate::models::rubrics::entities::Rubric> {
        use crate::models::Owner;
        use crate::models::rubrics::entities::Rubric;

        Ok(Rubric {
            id: self.id,
            name: self.name,
            owner: Owner::from_column(self.owner_id),
            category_ids: serde_json::from_str(&self.category_ids)?,
            criterion_ids: serde_json::from_str(&self.criterion_ids)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Owner;

    fn row(category_ids: &str, criterion_ids: &str) -> Model {
        Model {
            id: 3,
            name: "Privada".to_string(),
            owner_id: Some(7),
            category_ids: category_ids.to_string(),
            criterion_ids: criterion_ids.to_string(),
            created_at: 0,
            updated_at: 0,
        }
    }

    #[test]
    fn test_into_rubric_keeps_selection_order() {
        let rubric = row("[4,1,2]", "[9]").into_rubric().unwrap();
        assert_eq!(rubric.owner, Owner::User(7));
        assert_eq!(rubric.category_ids, vec![4, 1, 2]);
        assert_eq!(rubric.criterion_ids, vec![9]);
    }

    #[test]
    fn test_into_rubric_rejects_corrupt_column() {
        assert!(row("[4,", "[]").into_rubric().is_err());
    }
}
