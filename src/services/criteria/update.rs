use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{CriterionService, criterion_not_found, ensure_category_exists};
use crate::middlewares::RequireJWT;
use crate::models::{ErrorCode, criteria::requests::UpdateCriterionRequest};
use crate::policy::{Action, Resource, Target, authorize};
use crate::services::{bad_request, denial_response, internal_error};
use crate::utils::validate::validate_required_text;

pub async fn update_criterion(
    service: &CriterionService,
    request: &HttpRequest,
    criterion_id: i64,
    update_data: UpdateCriterionRequest,
) -> ActixResult<HttpResponse> {
    let caller = RequireJWT::extract_caller(request);
    let storage = service.get_storage(request)?;

    let criterion = match storage.get_criterion_by_id(criterion_id).await {
        Ok(Some(criterion)) => criterion,
        Ok(None) => return Ok(criterion_not_found()),
        Err(e) => return Ok(internal_error("Error al modificar criterio", e)),
    };

    // 非管理员的所有者只能修改所属分类
    if let Err(denial) = authorize(
        Action::Update(update_data.intent()),
        Resource::Criterion,
        caller.as_ref(),
        &Target::owned_by(criterion.owner),
    ) {
        return Ok(denial_response(
            denial,
            ErrorCode::CriterionNotFound,
            "Acceso denegado. Solo el administrador o el dueño del criterio pueden editarlo.",
        ));
    }

    if let Some(name) = &update_data.name
        && let Err(msg) = validate_required_text("nombre_criterio", name)
    {
        return Ok(bad_request(ErrorCode::ValidationFailed, msg));
    }
    if let Some(category_id) = update_data.category_id
        && let Err(response) = ensure_category_exists(&storage, category_id).await
    {
        return Ok(response);
    }

    match storage.update_criterion(criterion_id, update_data).await {
        Ok(Some(criterion)) => Ok(HttpResponse::Ok().json(criterion)),
        Ok(None) => Ok(criterion_not_found()),
        Err(e) => Ok(internal_error("Error al modificar criterio", e)),
    }
}
