use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::{UserService, user_not_found};
use crate::middlewares::RequireJWT;
use crate::models::{
    ErrorCode,
    users::{requests::UpdateUserRequest, responses::UserMessageResponse},
};
use crate::policy::{Action, Resource, Target, UpdateIntent, authorize};
use crate::services::{
    auth::register::check_email_exists, bad_request, denial_response, internal_error,
    resolve_config,
};
use crate::utils::password::hash_password;
use crate::utils::validate::{validate_email, validate_password, validate_required_text};

pub async fn update_user(
    service: &UserService,
    request: &HttpRequest,
    user_id: i64,
    mut update_data: UpdateUserRequest,
) -> ActixResult<HttpResponse> {
    let caller = RequireJWT::extract_caller(request);
    let storage = service.get_storage(request)?;
    let config = resolve_config(request)?;

    // 先按普通字段检查，再单独检查角色变更
    let target = Target::user(user_id);
    if let Err(denial) = authorize(
        Action::Update(UpdateIntent::Full),
        Resource::User,
        caller.as_ref(),
        &target,
    ) {
        return Ok(denial_response(
            denial,
            ErrorCode::UserNotFound,
            "Acceso denegado: No tienes permisos para modificar este usuario.",
        ));
    }
    if update_data.role.is_some()
        && let Err(denial) = authorize(
            Action::Update(UpdateIntent::RoleChange),
            Resource::User,
            caller.as_ref(),
            &target,
        )
    {
        return Ok(denial_response(
            denial,
            ErrorCode::UserNotFound,
            "Acceso denegado: No puedes modificar el rol.",
        ));
    }

    let existing = match storage.get_user_by_id(user_id).await {
        Ok(Some(user)) => user,
        Ok(None) => return Ok(user_not_found()),
        Err(e) => return Ok(internal_error("Error al modificar usuario", e)),
    };

    if let Err(msg) = validate_update(&update_data) {
        return Ok(bad_request(ErrorCode::ValidationFailed, msg));
    }

    if let Some(email) = &update_data.email
        && email != &existing.email
        && let Err(response) = check_email_exists(&storage, email).await
    {
        return Ok(response);
    }

    if let Some(password) = update_data.password.take() {
        update_data.password = match hash_password(&password, &config.argon2) {
            Ok(hash) => Some(hash),
            Err(e) => return Ok(internal_error("Error al modificar usuario", e)),
        };
    }

    match storage.update_user(user_id, update_data).await {
        Ok(Some(user)) => {
            info!("User {} updated", user.id);
            Ok(HttpResponse::Ok().json(UserMessageResponse {
                mensaje: "Usuario modificado con éxito".to_string(),
                usuario: user,
            }))
        }
        Ok(None) => Ok(user_not_found()),
        Err(e) if e.is_conflict() => Ok(bad_request(
            ErrorCode::UserEmailAlreadyExists,
            "El correo ya está en uso",
        )),
        Err(e) => Ok(internal_error("Error al modificar usuario", e)),
    }
}

fn validate_update(update: &UpdateUserRequest) -> Result<(), String> {
    if let Some(name) = &update.first_name {
        validate_required_text("nombre", name)?;
    }
    if let Some(surname) = &update.paternal_surname {
        validate_required_text("apellido_p", surname)?;
    }
    if let Some(surname) = &update.maternal_surname {
        validate_required_text("apellido_m", surname)?;
    }
    if let Some(email) = &update.email {
        validate_email(email)?;
    }
    if let Some(password) = &update.password {
        validate_password(password)?;
    }
    Ok(())
}
