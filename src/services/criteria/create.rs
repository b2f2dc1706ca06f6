use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::{CriterionService, ensure_category_exists};
use crate::middlewares::RequireJWT;
use crate::models::{
    ErrorCode,
    criteria::requests::{CreateCriterionRequest, NewCriterion},
};
use crate::policy::{Action, Resource, Target, authorize};
use crate::services::{
    bad_request, denial_response, internal_error, requested_owner, unauthenticated,
};
use crate::utils::validate::validate_required_text;

pub async fn create_criterion(
    service: &CriterionService,
    request: &HttpRequest,
    criterion_data: CreateCriterionRequest,
) -> ActixResult<HttpResponse> {
    let caller = RequireJWT::extract_caller(request);
    let Some(owner) = requested_owner(criterion_data.owner, caller.as_ref()) else {
        return Ok(unauthenticated());
    };

    if let Err(denial) = authorize(
        Action::Create,
        Resource::Criterion,
        caller.as_ref(),
        &Target::owned_by(owner),
    ) {
        return Ok(denial_response(
            denial,
            ErrorCode::CriterionNotFound,
            "Acceso denegado. Solo los administradores pueden añadir criterios de otros usuarios.",
        ));
    }

    if let Err(msg) = validate_required_text("nombre_criterio", &criterion_data.name) {
        return Ok(bad_request(ErrorCode::ValidationFailed, msg));
    }

    let storage = service.get_storage(request)?;
    if let Err(response) = ensure_category_exists(&storage, criterion_data.category_id).await {
        return Ok(response);
    }

    let new_criterion = NewCriterion {
        name: criterion_data.name,
        category_id: criterion_data.category_id,
        owner,
    };

    match storage.create_criterion(new_criterion).await {
        Ok(criterion) => {
            info!(
                "Criterion {} created in category {}",
                criterion.id, criterion.category_id
            );
            Ok(HttpResponse::Created().json(criterion))
        }
        Err(e) => Ok(internal_error("Error al crear criterio", e)),
    }
}
