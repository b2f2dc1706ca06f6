use std::sync::Arc;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use crate::models::{
    ErrorCode,
    users::{requests::CreateUserRequest, responses::UserMessageResponse},
};
use crate::storage::Storage;
use crate::utils::password::hash_password;
use crate::utils::validate::{
    validate_email, validate_password, validate_required_text, validate_username,
};

use super::AuthService;
use crate::services::{bad_request, internal_error, resolve_config};

pub async fn handle_register(
    service: &AuthService,
    mut create_request: CreateUserRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let config = resolve_config(request)?;

    if let Err(msg) = validate_registration(&create_request) {
        return Ok(bad_request(ErrorCode::ValidationFailed, msg));
    }

    // 1. 检查用户名是否已存在
    if let Err(response) = check_username_exists(&storage, &create_request.username).await {
        return Ok(response);
    }

    // 2. 检查邮箱是否已存在
    if let Err(response) = check_email_exists(&storage, &create_request.email).await {
        return Ok(response);
    }

    // 3. 将明文密码替换为哈希
    create_request.password = match hash_password(&create_request.password, &config.argon2) {
        Ok(hash) => hash,
        Err(e) => return Ok(internal_error("Error al registrar usuario", e)),
    };

    // 4. 创建用户
    match storage.create_user(create_request).await {
        Ok(user) => {
            info!("User {} registered with role {}", user.username, user.role);
            Ok(HttpResponse::Created().json(UserMessageResponse {
                mensaje: "Usuario registrado exitosamente".to_string(),
                usuario: user,
            }))
        }
        // 并发注册时由唯一索引兜底
        Err(e) if e.is_conflict() => Ok(bad_request(
            ErrorCode::UserNameAlreadyExists,
            "El nombre de usuario o el correo ya está en uso",
        )),
        Err(e) => Ok(internal_error("Error al registrar usuario", e)),
    }
}

fn validate_registration(request: &CreateUserRequest) -> Result<(), String> {
    validate_required_text("nombre", &request.first_name)?;
    validate_required_text("apellido_p", &request.paternal_surname)?;
    validate_required_text("apellido_m", &request.maternal_surname)?;
    validate_username(&request.username)?;
    validate_email(&request.email)?;
    validate_password(&request.password)?;
    Ok(())
}

async fn check_username_exists(
    storage: &Arc<dyn Storage>,
    username: &str,
) -> Result<(), HttpResponse> {
    match storage.get_user_by_username(username).await {
        Ok(Some(_)) => Err(bad_request(
            ErrorCode::UserNameAlreadyExists,
            "El nombre de usuario ya está en uso",
        )),
        Ok(None) => Ok(()),
        Err(e) => Err(internal_error("Error al registrar usuario", e)),
    }
}

pub(crate) async fn check_email_exists(
    storage: &Arc<dyn Storage>,
    email: &str,
) -> Result<(), HttpResponse> {
    match storage.get_user_by_email(email).await {
        Ok(Some(_)) => Err(bad_request(
            ErrorCode::UserEmailAlreadyExists,
            "El correo ya está en uso",
        )),
        Ok(None) => Ok(()),
        Err(e) => Err(internal_error("Error al registrar usuario", e)),
    }
}
