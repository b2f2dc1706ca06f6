use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{CriterionService, criterion_not_found};
use crate::middlewares::RequireJWT;
use crate::models::ErrorCode;
use crate::policy::{Action, Resource, Target, authorize};
use crate::services::{denial_response, internal_error};

pub async fn get_criterion(
    service: &CriterionService,
    request: &HttpRequest,
    criterion_id: i64,
) -> ActixResult<HttpResponse> {
    let caller = RequireJWT::extract_caller(request);
    let storage = service.get_storage(request)?;

    let criterion = match storage.get_criterion_by_id(criterion_id).await {
        Ok(Some(criterion)) => criterion,
        Ok(None) => return Ok(criterion_not_found()),
        Err(e) => return Ok(internal_error("Error al obtener criterio", e)),
    };

    if let Err(denial) = authorize(
        Action::Read,
        Resource::Criterion,
        caller.as_ref(),
        &Target::owned_by(criterion.owner),
    ) {
        return Ok(denial_response(
            denial,
            ErrorCode::CriterionNotFound,
            "Acceso denegado. No tienes permiso para ver este criterio.",
        ));
    }

    Ok(HttpResponse::Ok().json(criterion))
}
