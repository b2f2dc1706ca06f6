//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite 和 PostgreSQL。

mod categories;
mod criteria;
mod evaluations;
mod questions;
mod rubrics;
mod scores;
mod softwares;
mod users;

use crate::config::DatabaseConfig;
use crate::errors::{Result, UxEvalError};
use crate::models::OwnershipFilter;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ColumnTrait, Condition, ConnectOptions, Database, DatabaseConnection, DbErr};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 连接数据库并运行迁移
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        let db_url = Self::build_database_url(&config.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite:") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| UxEvalError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM storage ready, database: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &DatabaseConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| UxEvalError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory");

        // 内存数据库每个连接都是独立的库，只能用单连接
        let max_connections = if Self::is_in_memory(url) {
            1
        } else {
            config.pool_size.max(1)
        };

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| UxEvalError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL）
    async fn connect_generic(url: &str, config: &DatabaseConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.pool_size)
            .min_connections(1)
            .connect_timeout(Duration::from_secs(config.timeout))
            .acquire_timeout(Duration::from_secs(config.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false);

        Database::connect(opt)
            .await
            .map_err(|e| UxEvalError::database_connection(format!("无法连接到数据库: {e}")))
    }

    fn is_in_memory(url: &str) -> bool {
        url.contains(":memory:") || url.contains("mode=memory")
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite:") {
            Ok(url.to_string())
        } else if url == ":memory:" {
            Ok("sqlite::memory:".to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") {
            Ok(format!("sqlite://{url}?mode=rwc"))
        } else if url.starts_with("postgres://") || url.starts_with("postgresql://") {
            Ok(url.to_string())
        } else {
            Err(UxEvalError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

/// 带上下文的数据库错误，保留唯一约束冲突的分类
pub(crate) fn db_error(context: &str, err: DbErr) -> UxEvalError {
    match UxEvalError::from(err) {
        UxEvalError::Conflict(msg) => UxEvalError::conflict(format!("{context}: {msg}")),
        other => UxEvalError::database_operation(format!("{context}: {}", other.message())),
    }
}

/// 把归属过滤条件翻译为 `owner_id` 列上的条件
pub(crate) fn ownership_condition<C: ColumnTrait>(owner_column: C, scope: OwnershipFilter) -> Condition {
    match scope {
        OwnershipFilter::All => Condition::all(),
        OwnershipFilter::Owned(user_id) => Condition::all().add(owner_column.eq(user_id)),
        OwnershipFilter::OwnedOrPublic(user_id) => Condition::any()
            .add(owner_column.eq(user_id))
            .add(owner_column.is_null()),
    }
}

// Storage trait 实现
use crate::models::{
    categories::{
        entities::Category,
        requests::{CreateCategoryRequest, UpdateCategoryRequest},
    },
    criteria::{
        entities::Criterion,
        requests::{NewCriterion, UpdateCriterionRequest},
    },
    evaluations::{
        entities::Evaluation,
        requests::{NewEvaluation, UpdateEvaluationRequest},
    },
    questions::{
        entities::Question,
        requests::{NewQuestion, UpdateQuestionRequest},
    },
    rubrics::{
        entities::Rubric,
        requests::{NewRubric, UpdateRubricRequest},
    },
    scores::{
        entities::Score,
        requests::{NewScore, UpdateScoreRequest},
    },
    softwares::{
        entities::Software,
        requests::{NewSoftware, UpdateSoftwareRequest},
    },
    users::{
        entities::User,
        requests::{CreateUserRequest, UpdateUserRequest},
    },
};
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 用户模块
    async fn create_user(&self, user: CreateUserRequest) -> Result<User> {
        self.create_user_impl(user).await
    }

    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        self.get_user_by_id_impl(id).await
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        self.get_user_by_username_impl(username).await
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        self.get_user_by_email_impl(email).await
    }

    async fn list_users(&self) -> Result<Vec<User>> {
        self.list_users_impl().await
    }

    async fn update_user(&self, id: i64, update: UpdateUserRequest) -> Result<Option<User>> {
        self.update_user_impl(id, update).await
    }

    async fn delete_user(&self, id: i64) -> Result<bool> {
        self.delete_user_impl(id).await
    }

    // 分类模块
    async fn create_category(&self, category: CreateCategoryRequest) -> Result<Category> {
        self.create_category_impl(category).await
    }

    async fn get_category_by_id(&self, id: i64) -> Result<Option<Category>> {
        self.get_category_by_id_impl(id).await
    }

    async fn list_categories(&self) -> Result<Vec<Category>> {
        self.list_categories_impl().await
    }

    async fn update_category(
        &self,
        id: i64,
        update: UpdateCategoryRequest,
    ) -> Result<Option<Category>> {
        self.update_category_impl(id, update).await
    }

    async fn delete_category(&self, id: i64) -> Result<bool> {
        self.delete_category_impl(id).await
    }

    // 评价标准模块
    async fn create_criterion(&self, criterion: NewCriterion) -> Result<Criterion> {
        self.create_criterion_impl(criterion).await
    }

    async fn get_criterion_by_id(&self, id: i64) -> Result<Option<Criterion>> {
        self.get_criterion_by_id_impl(id).await
    }

    async fn list_criteria(
        &self,
        scope: OwnershipFilter,
        category_id: Option<i64>,
    ) -> Result<Vec<Criterion>> {
        self.list_criteria_impl(scope, category_id).await
    }

    async fn list_criteria_in_category(
        &self,
        category_id: i64,
        criterion_ids: &[i64],
    ) -> Result<Vec<Criterion>> {
        self.list_criteria_in_category_impl(category_id, criterion_ids)
            .await
    }

    async fn update_criterion(
        &self,
        id: i64,
        update: UpdateCriterionRequest,
    ) -> Result<Option<Criterion>> {
        self.update_criterion_impl(id, update).await
    }

    async fn delete_criterion(&self, id: i64) -> Result<bool> {
        self.delete_criterion_impl(id).await
    }

    // 问题模块
    async fn create_question(&self, question: NewQuestion) -> Result<Question> {
        self.create_question_impl(question).await
    }

    async fn get_question_by_id(&self, id: i64) -> Result<Option<Question>> {
        self.get_question_by_id_impl(id).await
    }

    async fn list_questions(
        &self,
        scope: OwnershipFilter,
        criterion_id: Option<i64>,
    ) -> Result<Vec<Question>> {
        self.list_questions_impl(scope, criterion_id).await
    }

    async fn update_question(
        &self,
        id: i64,
        update: UpdateQuestionRequest,
    ) -> Result<Option<Question>> {
        self.update_question_impl(id, update).await
    }

    async fn delete_question(&self, id: i64) -> Result<bool> {
        self.delete_question_impl(id).await
    }

    // 评分表模块
    async fn create_rubric(&self, rubric: NewRubric) -> Result<Rubric> {
        self.create_rubric_impl(rubric).await
    }

    async fn get_rubric_by_id(&self, id: i64) -> Result<Option<Rubric>> {
        self.get_rubric_by_id_impl(id).await
    }

    async fn list_rubrics(&self, scope: OwnershipFilter) -> Result<Vec<Rubric>> {
        self.list_rubrics_impl(scope).await
    }

    async fn update_rubric(&self, id: i64, update: UpdateRubricRequest) -> Result<Option<Rubric>> {
        self.update_rubric_impl(id, update).await
    }

    async fn delete_rubric(&self, id: i64) -> Result<bool> {
        self.delete_rubric_impl(id).await
    }

    // 软件模块
    async fn create_software(&self, software: NewSoftware) -> Result<Software> {
        self.create_software_impl(software).await
    }

    async fn get_software_by_id(&self, id: i64) -> Result<Option<Software>> {
        self.get_software_by_id_impl(id).await
    }

    async fn list_softwares(&self, scope: OwnershipFilter) -> Result<Vec<Software>> {
        self.list_softwares_impl(scope).await
    }

    async fn update_software(
        &self,
        id: i64,
        update: UpdateSoftwareRequest,
    ) -> Result<Option<Software>> {
        self.update_software_impl(id, update).await
    }

    async fn delete_software(&self, id: i64) -> Result<bool> {
        self.delete_software_impl(id).await
    }

    // 评估模块
    async fn create_evaluation(&self, evaluation: NewEvaluation) -> Result<Evaluation> {
        self.create_evaluation_impl(evaluation).await
    }

    async fn get_evaluation_by_id(&self, id: i64) -> Result<Option<Evaluation>> {
        self.get_evaluation_by_id_impl(id).await
    }

    async fn list_evaluations(&self, scope: OwnershipFilter) -> Result<Vec<Evaluation>> {
        self.list_evaluations_impl(scope).await
    }

    async fn update_evaluation(
        &self,
        id: i64,
        update: UpdateEvaluationRequest,
    ) -> Result<Option<Evaluation>> {
        self.update_evaluation_impl(id, update).await
    }

    async fn delete_evaluation(&self, id: i64) -> Result<bool> {
        self.delete_evaluation_impl(id).await
    }

    // 标准得分模块
    async fn create_score(&self, score: NewScore) -> Result<Score> {
        self.create_score_impl(score).await
    }

    async fn get_score_by_id(&self, id: i64) -> Result<Option<Score>> {
        self.get_score_by_id_impl(id).await
    }

    async fn list_scores(&self, scope: OwnershipFilter) -> Result<Vec<Score>> {
        self.list_scores_impl(scope).await
    }

    async fn list_scores_by_evaluation(&self, evaluation_id: i64) -> Result<Vec<Score>> {
        self.list_scores_by_evaluation_impl(evaluation_id).await
    }

    async fn update_score(&self, id: i64, update: UpdateScoreRequest) -> Result<Option<Score>> {
        self.update_score_impl(id, update).await
    }

    async fn delete_score(&self, id: i64) -> Result<bool> {
        self.delete_score_impl(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_database_url() {
        assert_eq!(
            SeaOrmStorage::build_database_url("uxeval.db").unwrap(),
            "sqlite://uxeval.db?mode=rwc"
        );
        assert_eq!(
            SeaOrmStorage::build_database_url(":memory:").unwrap(),
            "sqlite::memory:"
        );
        assert_eq!(
            SeaOrmStorage::build_database_url("postgres://u:p@localhost/uxeval").unwrap(),
            "postgres://u:p@localhost/uxeval"
        );
        assert!(SeaOrmStorage::build_database_url("mysql://localhost/uxeval").is_err());
    }

    #[test]
    fn test_in_memory_detection() {
        assert!(SeaOrmStorage::is_in_memory("sqlite::memory:"));
        assert!(SeaOrmStorage::is_in_memory("sqlite://file:test?mode=memory&cache=shared"));
        assert!(!SeaOrmStorage::is_in_memory("sqlite://uxeval.db?mode=rwc"));
    }
}
