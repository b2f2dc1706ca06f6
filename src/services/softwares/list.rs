use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SoftwareService;
use crate::middlewares::RequireJWT;
use crate::models::ErrorCode;
use crate::policy::{Resource, list_scope};
use crate::services::{denial_response, internal_error, unauthenticated};

pub async fn list_softwares(
    service: &SoftwareService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(caller) = RequireJWT::extract_caller(request) else {
        return Ok(unauthenticated());
    };

    let scope = match list_scope(Resource::Software, &caller) {
        Ok(scope) => scope,
        Err(denial) => {
            return Ok(denial_response(
                denial,
                ErrorCode::SoftwareNotFound,
                "Acceso denegado. No tienes permiso para ver softwares.",
            ));
        }
    };

    let storage = service.get_storage(request)?;
    match storage.list_softwares(scope).await {
        Ok(softwares) => Ok(HttpResponse::Ok().json(softwares)),
        Err(e) => Ok(internal_error("Error al obtener softwares", e)),
    }
}
