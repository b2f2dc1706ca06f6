use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::CriterionService;
use crate::middlewares::RequireJWT;
use crate::models::ErrorCode;
use crate::policy::{Resource, list_scope};
use crate::services::{denial_response, internal_error, unauthenticated};

pub async fn list_criteria(
    service: &CriterionService,
    request: &HttpRequest,
    category_id: Option<i64>,
) -> ActixResult<HttpResponse> {
    let Some(caller) = RequireJWT::extract_caller(request) else {
        return Ok(unauthenticated());
    };

    let scope = match list_scope(Resource::Criterion, &caller) {
        Ok(scope) => scope,
        Err(denial) => {
            return Ok(denial_response(
                denial,
                ErrorCode::CriterionNotFound,
                "Acceso denegado. No tienes permiso para ver criterios.",
            ));
        }
    };

    let storage = service.get_storage(request)?;
    match storage.list_criteria(scope, category_id).await {
        Ok(criteria) => Ok(HttpResponse::Ok().json(criteria)),
        Err(e) => Ok(internal_error("Error al obtener criterios", e)),
    }
}
