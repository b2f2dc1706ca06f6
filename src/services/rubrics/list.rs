use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::RubricService;
use crate::middlewares::RequireJWT;
use crate::models::ErrorCode;
use crate::policy::{Resource, list_scope};
use crate::services::{denial_response, internal_error, unauthenticated};

pub async fn list_rubrics(
    service: &RubricService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(caller) = RequireJWT::extract_caller(request) else {
        return Ok(unauthenticated());
    };

    // 通用评分表的所有者为公共，随 OwnedOrPublic 一起返回
    let scope = match list_scope(Resource::Rubric, &caller) {
        Ok(scope) => scope,
        Err(denial) => {
            return Ok(denial_response(
                denial,
                ErrorCode::RubricNotFound,
                "Acceso denegado. No tienes permiso para ver rúbricas.",
            ));
        }
    };

    let storage = service.get_storage(request)?;
    match storage.list_rubrics(scope).await {
        Ok(rubrics) => Ok(HttpResponse::Ok().json(rubrics)),
        Err(e) => Ok(internal_error("Error al obtener rúbricas", e)),
    }
}
