use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::{UserService, user_not_found};
use crate::middlewares::RequireJWT;
use crate::models::ErrorCode;
use crate::policy::{Action, Resource, Target, authorize};
use crate::services::{denial_response, internal_error};

pub async fn delete_user(
    service: &UserService,
    request: &HttpRequest,
    user_id: i64,
) -> ActixResult<HttpResponse> {
    let caller = RequireJWT::extract_caller(request);

    if let Err(denial) = authorize(
        Action::Delete,
        Resource::User,
        caller.as_ref(),
        &Target::user(user_id),
    ) {
        return Ok(denial_response(
            denial,
            ErrorCode::UserNotFound,
            "Acceso denegado. Solo los administradores pueden eliminar usuarios.",
        ));
    }

    let storage = service.get_storage(request)?;
    match storage.delete_user(user_id).await {
        Ok(true) => {
            info!("User {} deleted", user_id);
            Ok(HttpResponse::NoContent().finish())
        }
        Ok(false) => Ok(user_not_found()),
        Err(e) => Ok(internal_error("Error al eliminar usuario", e)),
    }
}
