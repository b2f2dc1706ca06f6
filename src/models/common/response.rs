use serde::{Deserialize, Serialize};

/// 业务错误码，随错误响应一起返回，便于客户端区分同一状态码下的不同原因
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ErrorCode {
    // 1xxx 请求错误
    BadRequest = 1000,
    ValidationFailed = 1001,
    ScoreOutOfRange = 1002,

    // 2xxx 认证
    Unauthorized = 2000,
    TokenInvalid = 2001,
    TokenExpired = 2002,
    AuthFailed = 2003,

    // 3xxx 权限
    PermissionDenied = 3000,
    EvaluationCompleted = 3001,

    // 4xxx 资源不存在
    UserNotFound = 4000,
    CategoryNotFound = 4001,
    CriterionNotFound = 4002,
    QuestionNotFound = 4003,
    RubricNotFound = 4004,
    SoftwareNotFound = 4005,
    EvaluationNotFound = 4006,
    ScoreNotFound = 4007,

    // 5xxx 冲突
    UserNameAlreadyExists = 5000,
    UserEmailAlreadyExists = 5001,

    InternalServerError = 9000,
}

/// 统一的错误响应结构
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    pub code: i32,
    #[serde(rename = "mensaje")]
    pub message: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl ApiResponse {
    pub fn error_empty(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code as i32,
            message: message.into(),
            timestamp: chrono::Utc::now(),
        }
    }
}

