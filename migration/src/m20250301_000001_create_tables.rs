use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// 自增主键列
fn id_column<T: IntoIden>(col: T) -> ColumnDef {
    ColumnDef::new(col)
        .big_integer()
        .not_null()
        .auto_increment()
        .primary_key()
        .to_owned()
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 创建用户表
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(id_column(Users::Id))
                    .col(ColumnDef::new(Users::FirstName).string().not_null())
                    .col(ColumnDef::new(Users::PaternalSurname).string().not_null())
                    .col(ColumnDef::new(Users::MaternalSurname).string().not_null())
                    .col(
                        ColumnDef::new(Users::Username)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Users::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Users::PasswordHash).string().not_null())
                    .col(ColumnDef::new(Users::Role).integer().not_null())
                    .col(ColumnDef::new(Users::CreatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建分类表
        manager
            .create_table(
                Table::create()
                    .table(Categories::Table)
                    .if_not_exists()
                    .col(id_column(Categories::Id))
                    .col(ColumnDef::new(Categories::Name).string().not_null())
                    .col(ColumnDef::new(Categories::Description).text().null())
                    .to_owned(),
            )
            .await?;

        // 创建评价标准表，owner_id 为 NULL 表示公共
        manager
            .create_table(
                Table::create()
                    .table(Criteria::Table)
                    .if_not_exists()
                    .col(id_column(Criteria::Id))
                    .col(ColumnDef::new(Criteria::Name).string().not_null())
                    .col(ColumnDef::new(Criteria::CategoryId).big_integer().not_null())
                    .col(ColumnDef::new(Criteria::OwnerId).big_integer().null())
                    .to_owned(),
            )
            .await?;

        // 创建问题表
        manager
            .create_table(
                Table::create()
                    .table(Questions::Table)
                    .if_not_exists()
                    .col(id_column(Questions::Id))
                    .col(ColumnDef::new(Questions::Text).text().not_null())
                    .col(ColumnDef::new(Questions::CriterionId).big_integer().not_null())
                    .col(ColumnDef::new(Questions::RubricId).big_integer().null())
                    .col(ColumnDef::new(Questions::OwnerId).big_integer().null())
                    .to_owned(),
            )
            .await?;

        // 创建评分表
        manager
            .create_table(
                Table::create()
                    .table(Rubrics::Table)
                    .if_not_exists()
                    .col(id_column(Rubrics::Id))
                    .col(ColumnDef::new(Rubrics::Name).string().not_null())
                    .col(ColumnDef::new(Rubrics::OwnerId).big_integer().null())
                    .col(ColumnDef::new(Rubrics::CategoryIds).text().not_null())
                    .col(ColumnDef::new(Rubrics::CriterionIds).text().not_null())
                    .col(ColumnDef::new(Rubrics::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Rubrics::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建软件表
        manager
            .create_table(
                Table::create()
                    .table(Softwares::Table)
                    .if_not_exists()
                    .col(id_column(Softwares::Id))
                    .col(ColumnDef::new(Softwares::OwnerId).big_integer().not_null())
                    .col(ColumnDef::new(Softwares::Name).string().not_null())
                    .col(ColumnDef::new(Softwares::Description).text().null())
                    .col(ColumnDef::new(Softwares::ReleaseDate).big_integer().null())
                    .col(ColumnDef::new(Softwares::CreatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建评估表
        manager
            .create_table(
                Table::create()
                    .table(Evaluations::Table)
                    .if_not_exists()
                    .col(id_column(Evaluations::Id))
                    .col(ColumnDef::new(Evaluations::SoftwareId).big_integer().not_null())
                    .col(ColumnDef::new(Evaluations::RubricId).big_integer().not_null())
                    .col(ColumnDef::new(Evaluations::OwnerId).big_integer().not_null())
                    .col(ColumnDef::new(Evaluations::TotalScore).double().null())
                    .col(ColumnDef::new(Evaluations::Average).double().null())
                    .col(
                        ColumnDef::new(Evaluations::Completed)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Evaluations::EvaluatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建标准得分表
        manager
            .create_table(
                Table::create()
                    .table(Scores::Table)
                    .if_not_exists()
                    .col(id_column(Scores::Id))
                    .col(ColumnDef::new(Scores::RubricId).big_integer().not_null())
                    .col(ColumnDef::new(Scores::CriterionId).big_integer().not_null())
                    .col(ColumnDef::new(Scores::EvaluationId).big_integer().not_null())
                    .col(ColumnDef::new(Scores::OwnerId).big_integer().not_null())
                    .col(ColumnDef::new(Scores::Value).double().not_null())
                    .col(ColumnDef::new(Scores::ScoredAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建索引
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_criteria_category_id")
                    .table(Criteria::Table)
                    .col(Criteria::CategoryId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_questions_criterion_id")
                    .table(Questions::Table)
                    .col(Questions::CriterionId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_evaluations_owner_id")
                    .table(Evaluations::Table)
                    .col(Evaluations::OwnerId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_scores_evaluation_id")
                    .table(Scores::Table)
                    .col(Scores::EvaluationId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 按照创建的相反顺序删除
        manager
            .drop_table(Table::drop().table(Scores::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Evaluations::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Softwares::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Rubrics::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Questions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Criteria::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Categories::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Users {
    #[sea_orm(iden = "users")]
    Table,
    Id,
    FirstName,
    PaternalSurname,
    MaternalSurname,
    Username,
    Email,
    PasswordHash,
    Role,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Categories {
    #[sea_orm(iden = "categories")]
    Table,
    Id,
    Name,
    Description,
}

#[derive(DeriveIden)]
enum Criteria {
    #[sea_orm(iden = "criteria")]
    Table,
    Id,
    Name,
    CategoryId,
    OwnerId,
}

#[derive(DeriveIden)]
enum Questions {
    #[sea_orm(iden = "questions")]
    Table,
    Id,
    Text,
    CriterionId,
    RubricId,
    OwnerId,
}

#[derive(DeriveIden)]
pub(crate) enum Rubrics {
    #[sea_orm(iden = "rubrics")]
    Table,
    Id,
    Name,
    OwnerId,
    CategoryIds,
    CriterionIds,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Softwares {
    #[sea_orm(iden = "softwares")]
    Table,
    Id,
    OwnerId,
    Name,
    Description,
    ReleaseDate,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Evaluations {
    #[sea_orm(iden = "evaluations")]
    Table,
    Id,
    SoftwareId,
    RubricId,
    OwnerId,
    TotalScore,
    Average,
    Completed,
    EvaluatedAt,
}

#[derive(DeriveIden)]
enum Scores {
    #[sea_orm(iden = "scores")]
    Table,
    Id,
    RubricId,
    CriterionId,
    EvaluationId,
    OwnerId,
    Value,
    ScoredAt,
}
