use std::sync::Arc;

use crate::config::DatabaseConfig;
use crate::models::{
    OwnershipFilter,
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

use crate::errors::Result;

pub mod sea_orm_storage;

pub use sea_orm_storage::SeaOrmStorage;

/// 数据存储接口
///
/// 查询返回 `Option`，删除返回是否真的删除了记录；
/// 权限判断不在这一层，调用方传入已经确定的过滤条件。
#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户管理方法
    // 创建用户（密码字段已是哈希值）
    async fn create_user(&self, user: CreateUserRequest) -> Result<User>;
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>>;
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>>;
    async fn list_users(&self) -> Result<Vec<User>>;
    // 更新用户信息（密码字段已是哈希值）
    async fn update_user(&self, id: i64, update: UpdateUserRequest) -> Result<Option<User>>;
    async fn delete_user(&self, id: i64) -> Result<bool>;

    /// 分类管理方法
    async fn create_category(&self, category: CreateCategoryRequest) -> Result<Category>;
    async fn get_category_by_id(&self, id: i64) -> Result<Option<Category>>;
    async fn list_categories(&self) -> Result<Vec<Category>>;
    async fn update_category(
        &self,
        id: i64,
        update: UpdateCategoryRequest,
    ) -> Result<Option<Category>>;
    async fn delete_category(&self, id: i64) -> Result<bool>;

    /// 评价标准管理方法
    async fn create_criterion(&self, criterion: NewCriterion) -> Result<Criterion>;
    async fn get_criterion_by_id(&self, id: i64) -> Result<Option<Criterion>>;
    // 按归属列出，可选限定分类
    async fn list_criteria(
        &self,
        scope: OwnershipFilter,
        category_id: Option<i64>,
    ) -> Result<Vec<Criterion>>;
    // 某分类下、且编号在给定集合中的标准
    async fn list_criteria_in_category(
        &self,
        category_id: i64,
        criterion_ids: &[i64],
    ) -> Result<Vec<Criterion>>;
    async fn update_criterion(
        &self,
        id: i64,
        update: UpdateCriterionRequest,
    ) -> Result<Option<Criterion>>;
    async fn delete_criterion(&self, id: i64) -> Result<bool>;

    /// 问题管理方法
    async fn create_question(&self, question: NewQuestion) -> Result<Question>;
    async fn get_question_by_id(&self, id: i64) -> Result<Option<Question>>;
    async fn list_questions(
        &self,
        scope: OwnershipFilter,
        criterion_id: Option<i64>,
    ) -> Result<Vec<Question>>;
    async fn update_question(
        &self,
        id: i64,
        update: UpdateQuestionRequest,
    ) -> Result<Option<Question>>;
    async fn delete_question(&self, id: i64) -> Result<bool>;

    /// 评分表管理方法
    async fn create_rubric(&self, rubric: NewRubric) -> Result<Rubric>;
    async fn get_rubric_by_id(&self, id: i64) -> Result<Option<Rubric>>;
    async fn list_rubrics(&self, scope: OwnershipFilter) -> Result<Vec<Rubric>>;
    async fn update_rubric(&self, id: i64, update: UpdateRubricRequest) -> Result<Option<Rubric>>;
    async fn delete_rubric(&self, id: i64) -> Result<bool>;

    /// 软件管理方法
    async fn create_software(&self, software: NewSoftware) -> Result<Software>;
    async fn get_software_by_id(&self, id: i64) -> Result<Option<Software>>;
    async fn list_softwares(&self, scope: OwnershipFilter) -> Result<Vec<Software>>;
    async fn update_software(
        &self,
        id: i64,
        update: UpdateSoftwareRequest,
    ) -> Result<Option<Software>>;
    async fn delete_software(&self, id: i64) -> Result<bool>;

    /// 评估管理方法
    async fn create_evaluation(&self, evaluation: NewEvaluation) -> Result<Evaluation>;
    async fn get_evaluation_by_id(&self, id: i64) -> Result<Option<Evaluation>>;
    async fn list_evaluations(&self, scope: OwnershipFilter) -> Result<Vec<Evaluation>>;
    async fn update_evaluation(
        &self,
        id: i64,
        update: UpdateEvaluationRequest,
    ) -> Result<Option<Evaluation>>;
    async fn delete_evaluation(&self, id: i64) -> Result<bool>;

    /// 标准得分管理方法
    async fn create_score(&self, score: NewScore) -> Result<Score>;
    async fn get_score_by_id(&self, id: i64) -> Result<Option<Score>>;
    async fn list_scores(&self, scope: OwnershipFilter) -> Result<Vec<Score>>;
    async fn list_scores_by_evaluation(&self, evaluation_id: i64) -> Result<Vec<Score>>;
    async fn update_score(&self, id: i64, update: UpdateScoreRequest) -> Result<Option<Score>>;
    async fn delete_score(&self, id: i64) -> Result<bool>;
}

/// 根据配置创建存储实例（连接数据库并执行迁移）
pub async fn create_storage(config: &DatabaseConfig) -> Result<Arc<dyn Storage>> {
    let storage = SeaOrmStorage::connect(config).await?;
    Ok(Arc::new(storage))
}
