use sea_orm_migration::prelude::*;

use crate::m20250301_000001_create_tables::Rubrics;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// 通用评分表固定使用编号 0，自增序列从 1 开始，不会冲突
const GENERAL_RUBRIC_ID: i64 = 0;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let now = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs() as i64)
            .unwrap_or_default();

        let insert = Query::insert()
            .into_table(Rubrics::Table)
            .columns([
                Rubrics::Id,
                Rubrics::Name,
                Rubrics::OwnerId,
                Rubrics::CategoryIds,
                Rubrics::CriterionIds,
                Rubrics::CreatedAt,
                Rubrics::UpdatedAt,
            ])
            .values_panic([
                GENERAL_RUBRIC_ID.into(),
                "Rúbrica general".into(),
                Option::<i64>::None.into(),
                "[]".into(),
                "[]".into(),
                now.into(),
                now.into(),
            ])
            .to_owned();

        manager.exec_stmt(insert).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let delete = Query::delete()
            .from_table(Rubrics::Table)
            .and_where(Expr::col(Rubrics::Id).eq(GENERAL_RUBRIC_ID))
            .to_owned();

        manager.exec_stmt(delete).await
    }
}
