use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{UserService, user_not_found};
use crate::middlewares::RequireJWT;
use crate::models::ErrorCode;
use crate::policy::{Action, Resource, Target, authorize};
use crate::services::{denial_response, internal_error};

pub async fn get_user(
    service: &UserService,
    request: &HttpRequest,
    user_id: i64,
) -> ActixResult<HttpResponse> {
    let caller = RequireJWT::extract_caller(request);
    let storage = service.get_storage(request)?;

    let user = match storage.get_user_by_id(user_id).await {
        Ok(Some(user)) => user,
        Ok(None) => return Ok(user_not_found()),
        Err(e) => return Ok(internal_error("Error al obtener usuario", e)),
    };

    if let Err(denial) = authorize(
        Action::Read,
        Resource::User,
        caller.as_ref(),
        &Target::user(user.id),
    ) {
        return Ok(denial_response(
            denial,
            ErrorCode::UserNotFound,
            "Acceso denegado: No tienes permisos para ver este usuario.",
        ));
    }

    Ok(HttpResponse::Ok().json(user))
}
