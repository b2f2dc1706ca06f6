use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::UserService;
use crate::middlewares::RequireJWT;
use crate::models::ErrorCode;
use crate::policy::{Resource, list_scope};
use crate::services::{denial_response, internal_error, unauthenticated};

pub async fn list_users(service: &UserService, request: &HttpRequest) -> ActixResult<HttpResponse> {
    let Some(caller) = RequireJWT::extract_caller(request) else {
        return Ok(unauthenticated());
    };

    if let Err(denial) = list_scope(Resource::User, &caller) {
        return Ok(denial_response(
            denial,
            ErrorCode::UserNotFound,
            "Acceso denegado: Solo el administrador puede ver todos los usuarios",
        ));
    }

    let storage = service.get_storage(request)?;
    match storage.list_users().await {
        Ok(users) => Ok(HttpResponse::Ok().json(users)),
        Err(e) => Ok(internal_error("Error al obtener usuarios", e)),
    }
}
