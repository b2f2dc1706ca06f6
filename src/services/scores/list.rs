use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ScoreService;
use crate::middlewares::RequireJWT;
use crate::models::ErrorCode;
use crate::policy::{Resource, list_scope};
use crate::services::{denial_response, internal_error, unauthenticated};

pub async fn list_scores(service: &ScoreService, request: &HttpRequest) -> ActixResult<HttpResponse> {
    let Some(caller) = RequireJWT::extract_caller(request) else {
        return Ok(unauthenticated());
    };

    let scope = match list_scope(Resource::Score, &caller) {
        Ok(scope) => scope,
        Err(denial) => {
            return Ok(denial_response(
                denial,
                ErrorCode::ScoreNotFound,
                "Acceso denegado. No tienes permiso para ver puntajes.",
            ));
        }
    };

    let storage = service.get_storage(request)?;
    match storage.list_scores(scope).await {
        Ok(scores) => Ok(HttpResponse::Ok().json(scores)),
        Err(e) => Ok(internal_error("Error al obtener puntajes", e)),
    }
}
