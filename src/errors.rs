//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。
//! 这里的错误只在服务端内部流转，HTTP 层负责把它们映射为状态码和通用提示。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_uxeval_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum UxEvalError {
            $($variant(String),)*
        }

        impl UxEvalError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(UxEvalError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(UxEvalError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(UxEvalError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl UxEvalError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        UxEvalError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_uxeval_errors! {
    DatabaseConfig("E001", "Database Configuration Error"),
    DatabaseConnection("E002", "Database Connection Error"),
    DatabaseOperation("E003", "Database Operation Error"),
    Serialization("E004", "Serialization Error"),
    Conflict("E005", "Unique Constraint Conflict"),
    PasswordHash("E006", "Password Hash Error"),
    Token("E007", "Token Error"),
}

impl UxEvalError {
    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }

    /// 是否为唯一约束冲突
    pub fn is_conflict(&self) -> bool {
        matches!(self, UxEvalError::Conflict(_))
    }
}

impl fmt::Display for UxEvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for UxEvalError {}

// 为常见的错误类型实现 From trait
impl From<sea_orm::DbErr> for UxEvalError {
    fn from(err: sea_orm::DbErr) -> Self {
        let text = err.to_string();
        // SQLite 与 PostgreSQL 的唯一约束报错文本不同
        if text.contains("UNIQUE constraint failed") || text.contains("duplicate key value") {
            UxEvalError::Conflict(text)
        } else {
            UxEvalError::DatabaseOperation(text)
        }
    }
}

impl From<serde_json::Error> for UxEvalError {
    fn from(err: serde_json::Error) -> Self {
        UxEvalError::Serialization(err.to_string())
    }
}

impl From<jsonwebtoken::errors::Error> for UxEvalError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        UxEvalError::Token(err.to_string())
    }
}

impl From<argon2::password_hash::Error> for UxEvalError {
    fn from(err: argon2::password_hash::Error) -> Self {
        UxEvalError::PasswordHash(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, UxEvalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(UxEvalError::database_config("test").code(), "E001");
        assert_eq!(UxEvalError::database_operation("test").code(), "E003");
        assert_eq!(UxEvalError::conflict("test").code(), "E005");
        assert_eq!(UxEvalError::token("test").code(), "E007");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            UxEvalError::password_hash("test").error_type(),
            "Password Hash Error"
        );
        assert_eq!(
            UxEvalError::serialization("test").error_type(),
            "Serialization Error"
        );
    }

    #[test]
    fn test_format_simple() {
        let err = UxEvalError::database_connection("refused");
        let formatted = err.format_simple();
        assert!(formatted.contains("Database Connection Error"));
        assert!(formatted.contains("refused"));
    }

    #[test]
    fn test_unique_violation_becomes_conflict() {
        let err: UxEvalError = sea_orm::DbErr::Custom(
            "UNIQUE constraint failed: users.username".to_string(),
        )
        .into();
        assert!(err.is_conflict());

        let err: UxEvalError = sea_orm::DbErr::Custom("disk I/O error".to_string()).into();
        assert!(!err.is_conflict());
    }
}
