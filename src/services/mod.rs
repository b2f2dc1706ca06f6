pub mod auth;
pub mod categories;
pub mod criteria;
pub mod evaluations;
pub mod questions;
pub mod rubrics;
pub mod scores;
pub mod softwares;
pub mod users;

pub use auth::AuthService;
pub use categories::CategoryService;
pub use criteria::CriterionService;
pub use evaluations::EvaluationService;
pub use questions::QuestionService;
pub use rubrics::RubricService;
pub use scores::ScoreService;
pub use softwares::SoftwareService;
pub use users::UserService;

use std::fmt::Display;
use std::sync::Arc;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, http::StatusCode, web};
use tracing::error;

use crate::config::AppConfig;
use crate::models::{ApiResponse, ErrorCode, Owner};
use crate::policy::{Caller, Denial};
use crate::storage::Storage;

pub(crate) const UNAUTHENTICATED_MESSAGE: &str = "Acceso denegado. No se proporcionó un token.";

// 服务持有的存储为空时，从 app_data 中取
pub(crate) fn resolve_storage(
    storage: &Option<Arc<dyn Storage>>,
    request: &HttpRequest,
) -> ActixResult<Arc<dyn Storage>> {
    if let Some(storage) = storage {
        return Ok(storage.clone());
    }
    request
        .app_data::<web::Data<Arc<dyn Storage>>>()
        .map(|data| data.get_ref().clone())
        .ok_or_else(|| {
            error!("Storage not registered in app data");
            actix_web::error::ErrorInternalServerError("storage unavailable")
        })
}

pub(crate) fn resolve_config(request: &HttpRequest) -> ActixResult<web::Data<AppConfig>> {
    request
        .app_data::<web::Data<AppConfig>>()
        .cloned()
        .ok_or_else(|| {
            error!("AppConfig not registered in app data");
            actix_web::error::ErrorInternalServerError("configuration unavailable")
        })
}

pub(crate) fn error_response(
    status: StatusCode,
    code: ErrorCode,
    message: impl Into<String>,
) -> HttpResponse {
    HttpResponse::build(status).json(ApiResponse::error_empty(code, message))
}

pub(crate) fn bad_request(code: ErrorCode, message: impl Into<String>) -> HttpResponse {
    error_response(StatusCode::BAD_REQUEST, code, message)
}

pub(crate) fn not_found(code: ErrorCode, message: impl Into<String>) -> HttpResponse {
    error_response(StatusCode::NOT_FOUND, code, message)
}

pub(crate) fn unauthenticated() -> HttpResponse {
    error_response(
        StatusCode::UNAUTHORIZED,
        ErrorCode::Unauthorized,
        UNAUTHENTICATED_MESSAGE,
    )
}

/// 把策略拒绝转换为响应；`Concealed` 使用调用方给出的"不存在"错误码
pub(crate) fn denial_response(
    denial: Denial,
    not_found_code: ErrorCode,
    message: &str,
) -> HttpResponse {
    match denial {
        Denial::Unauthenticated => unauthenticated(),
        Denial::Forbidden => {
            error_response(StatusCode::FORBIDDEN, ErrorCode::PermissionDenied, message)
        }
        Denial::Concealed => not_found(not_found_code, message),
    }
}

/// 记录内部错误，只把通用信息返回给客户端
pub(crate) fn internal_error(message: &str, err: impl Display) -> HttpResponse {
    error!("{}: {}", message, err);
    error_response(
        StatusCode::INTERNAL_SERVER_ERROR,
        ErrorCode::InternalServerError,
        message,
    )
}

/// 创建接口里请求体给出的所有者
///
/// 已登录的调用者省略时默认为本人；匿名调用者必须显式给出。
pub(crate) fn requested_owner(requested: Option<Owner>, caller: Option<&Caller>) -> Option<Owner> {
    requested.or_else(|| caller.map(|c| Owner::User(c.id)))
}

/// 匿名创建时确认所有者是一个真实存在的用户
pub(crate) async fn ensure_user_exists(
    storage: &Arc<dyn Storage>,
    owner: Option<Owner>,
) -> Result<i64, HttpResponse> {
    let Some(Owner::User(user_id)) = owner else {
        return Err(bad_request(
            ErrorCode::ValidationFailed,
            "El campo 'id_usuario' debe indicar un usuario existente",
        ));
    };
    match storage.get_user_by_id(user_id).await {
        Ok(Some(_)) => Ok(user_id),
        Ok(None) => Err(bad_request(
            ErrorCode::UserNotFound,
            format!("El usuario {user_id} no existe"),
        )),
        Err(e) => Err(internal_error("Error al verificar el usuario", e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::users::entities::UserRole;

    #[test]
    fn test_requested_owner_defaults_to_caller() {
        let caller = Caller::new(4, UserRole::Standard);
        assert_eq!(requested_owner(None, Some(&caller)), Some(Owner::User(4)));
        assert_eq!(
            requested_owner(Some(Owner::Public), Some(&caller)),
            Some(Owner::Public)
        );
        assert_eq!(requested_owner(None, None), None);
    }

    #[test]
    fn test_denial_status_codes() {
        assert_eq!(
            denial_response(Denial::Unauthenticated, ErrorCode::RubricNotFound, "x").status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            denial_response(Denial::Forbidden, ErrorCode::RubricNotFound, "x").status(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            denial_response(Denial::Concealed, ErrorCode::RubricNotFound, "x").status(),
            StatusCode::NOT_FOUND
        );
    }
}
