pub mod optional_jwt;
pub mod require_jwt;

pub use optional_jwt::OptionalJWT;
pub use require_jwt::RequireJWT;

use std::sync::Arc;

use actix_web::{
    HttpResponse,
    dev::ServiceRequest,
    http::{StatusCode, header::AUTHORIZATION},
    web,
};
use tracing::{debug, error, info};

use crate::config::AppConfig;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};
use crate::policy::Caller;
use crate::storage::Storage;
use crate::utils::jwt::{JwtUtils, TokenFailure};

const BEARER_PREFIX: &str = "Bearer ";

// 辅助函数：创建错误响应
pub(crate) fn create_error_response(
    status: StatusCode,
    code: ErrorCode,
    message: &str,
) -> HttpResponse {
    if status == StatusCode::NO_CONTENT {
        return HttpResponse::build(status).finish();
    }
    HttpResponse::build(status).json(ApiResponse::error_empty(code, message))
}

/// 身份识别失败的原因
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AuthFailure {
    Missing,
    Invalid,
    Expired,
    UserNotFound,
    Internal,
}

impl AuthFailure {
    pub(crate) fn into_response(self) -> HttpResponse {
        let (status, code, message) = match self {
            AuthFailure::Missing => (
                StatusCode::UNAUTHORIZED,
                ErrorCode::Unauthorized,
                "Acceso denegado. No se proporcionó un token.",
            ),
            AuthFailure::Invalid => (
                StatusCode::UNAUTHORIZED,
                ErrorCode::TokenInvalid,
                "Token inválido.",
            ),
            AuthFailure::Expired => (
                StatusCode::UNAUTHORIZED,
                ErrorCode::TokenExpired,
                "El token ha expirado.",
            ),
            AuthFailure::UserNotFound => (
                StatusCode::NOT_FOUND,
                ErrorCode::UserNotFound,
                "Usuario no encontrado.",
            ),
            AuthFailure::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorCode::InternalServerError,
                "Error al procesar el token.",
            ),
        };
        create_error_response(status, code, message)
    }
}

impl From<TokenFailure> for AuthFailure {
    fn from(failure: TokenFailure) -> Self {
        match failure {
            TokenFailure::Invalid => AuthFailure::Invalid,
            TokenFailure::Expired => AuthFailure::Expired,
            TokenFailure::Internal => AuthFailure::Internal,
        }
    }
}

/// 从 `Authorization` 头识别调用者。
///
/// 没有携带令牌时返回 `Ok(None)`，由调用方决定是否放行匿名请求。
/// 角色以存储中的当前值为准，不信任令牌里签发时的角色。
pub(crate) async fn identify(req: &ServiceRequest) -> Result<Option<Caller>, AuthFailure> {
    let Some(header) = req.headers().get(AUTHORIZATION) else {
        return Ok(None);
    };

    let raw = header.to_str().map_err(|_| AuthFailure::Invalid)?.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    let token = match raw.strip_prefix(BEARER_PREFIX) {
        Some(token) if token.trim().is_empty() => return Ok(None),
        Some(token) => token.trim(),
        None => return Err(AuthFailure::Invalid),
    };

    let config = req.app_data::<web::Data<AppConfig>>().ok_or_else(|| {
        error!("AppConfig not registered in app data");
        AuthFailure::Internal
    })?;

    let claims = JwtUtils::verify_access_token(&config.jwt, token).map_err(|err| {
        info!("JWT token validation failed: {}", err);
        AuthFailure::from(TokenFailure::from(&err))
    })?;

    let user_id = claims.user_id().ok_or(AuthFailure::Invalid)?;

    let storage = req
        .app_data::<web::Data<Arc<dyn Storage>>>()
        .ok_or_else(|| {
            error!("Storage not registered in app data");
            AuthFailure::Internal
        })?
        .get_ref()
        .clone();

    let user = storage
        .get_user_by_id(user_id)
        .await
        .map_err(|err| {
            error!("Failed to load user {} for authentication: {}", user_id, err);
            AuthFailure::Internal
        })?
        .ok_or(AuthFailure::UserNotFound)?;

    if user.role != UserRole::from_code(claims.rol).unwrap_or(user.role) {
        debug!(
            "Role of user {} changed since token issue, using stored role",
            user.id
        );
    }

    Ok(Some(Caller::new(user.id, user.role)))
}
