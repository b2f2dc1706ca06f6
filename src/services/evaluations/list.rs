use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::EvaluationService;
use crate::middlewares::RequireJWT;
use crate::models::ErrorCode;
use crate::policy::{Resource, list_scope};
use crate::services::{denial_response, internal_error, unauthenticated};

pub async fn list_evaluations(
    service: &EvaluationService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(caller) = RequireJWT::extract_caller(request) else {
        return Ok(unauthenticated());
    };

    let scope = match list_scope(Resource::Evaluation, &caller) {
        Ok(scope) => scope,
        Err(denial) => {
            return Ok(denial_response(
                denial,
                ErrorCode::EvaluationNotFound,
                "Acceso denegado. No tienes permiso para ver evaluaciones.",
            ));
        }
    };

    let storage = service.get_storage(request)?;
    match storage.list_evaluations(scope).await {
        Ok(evaluations) => Ok(HttpResponse::Ok().json(evaluations)),
        Err(e) => Ok(internal_error("Error al obtener evaluaciones", e)),
    }
}
