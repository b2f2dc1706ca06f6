use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, http::StatusCode};
use tracing::info;

use crate::models::{
    ErrorCode,
    auth::{requests::LoginRequest, responses::LoginResponse},
};
use crate::utils::jwt::JwtUtils;
use crate::utils::password::verify_password;

use super::AuthService;
use crate::services::{error_response, internal_error, not_found, resolve_config};

pub async fn handle_login(
    service: &AuthService,
    login_request: LoginRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let config = resolve_config(request)?;

    // 1. 按邮箱查找用户
    let user = match storage.get_user_by_email(&login_request.email).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            return Ok(not_found(ErrorCode::UserNotFound, "Usuario no encontrado"));
        }
        Err(e) => return Ok(internal_error("Error al iniciar sesión", e)),
    };

    // 2. 验证密码
    if !verify_password(&login_request.password, &user.password_hash) {
        return Ok(error_response(
            StatusCode::UNAUTHORIZED,
            ErrorCode::AuthFailed,
            "Contraseña incorrecta",
        ));
    }

    // 3. 签发令牌
    match JwtUtils::generate_access_token(&config.jwt, user.id, user.role) {
        Ok(token) => {
            info!("User {} logged in successfully", user.username);
            Ok(HttpResponse::Ok().json(LoginResponse {
                mensaje: "Inicio de sesión exitoso".to_string(),
                token,
            }))
        }
        Err(e) => Ok(internal_error("Error al iniciar sesión", e)),
    }
}
