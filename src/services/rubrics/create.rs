use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::{RubricService, ensure_selection_exists};
use crate::middlewares::RequireJWT;
use crate::models::{
    ErrorCode, Owner,
    rubrics::requests::{CreateRubricRequest, NewRubric},
};
use crate::policy::{Action, Resource, Target, authorize};
use crate::services::{bad_request, denial_response, internal_error, unauthenticated};
use crate::utils::validate::validate_required_text;

pub async fn create_rubric(
    service: &RubricService,
    request: &HttpRequest,
    rubric_data: CreateRubricRequest,
) -> ActixResult<HttpResponse> {
    let Some(caller) = RequireJWT::extract_caller(request) else {
        return Ok(unauthenticated());
    };
    // 所有者总是调用者本人
    let owner = Owner::User(caller.id);

    if let Err(denial) = authorize(
        Action::Create,
        Resource::Rubric,
        Some(&caller),
        &Target::owned_by(owner),
    ) {
        return Ok(denial_response(
            denial,
            ErrorCode::RubricNotFound,
            "Acceso denegado. No tienes permiso para crear rúbricas.",
        ));
    }

    if let Err(msg) = validate_required_text("nombre_rubrica", &rubric_data.name) {
        return Ok(bad_request(ErrorCode::ValidationFailed, msg));
    }

    let storage = service.get_storage(request)?;
    if let Err(response) = ensure_selection_exists(
        &storage,
        &rubric_data.category_ids,
        &rubric_data.criterion_ids,
    )
    .await
    {
        return Ok(response);
    }

    let new_rubric = NewRubric {
        name: rubric_data.name,
        owner,
        category_ids: rubric_data.category_ids,
        criterion_ids: rubric_data.criterion_ids,
    };

    match storage.create_rubric(new_rubric).await {
        Ok(rubric) => {
            info!("Rubric {} created by user {}", rubric.id, caller.id);
            Ok(HttpResponse::Created().json(rubric))
        }
        Err(e) => Ok(internal_error("Error al crear la rúbrica", e)),
    }
}
