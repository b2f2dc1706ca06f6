use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{RubricService, ensure_selection_exists, rubric_not_found};
use crate::middlewares::RequireJWT;
use crate::models::{ErrorCode, rubrics::requests::UpdateRubricRequest};
use crate::policy::{Action, Resource, Target, UpdateIntent, authorize};
use crate::services::{bad_request, denial_response, internal_error};
use crate::utils::validate::validate_required_text;

pub async fn update_rubric(
    service: &RubricService,
    request: &HttpRequest,
    rubric_id: i64,
    update_data: UpdateRubricRequest,
) -> ActixResult<HttpResponse> {
    let caller = RequireJWT::extract_caller(request);
    let storage = service.get_storage(request)?;

    let rubric = match storage.get_rubric_by_id(rubric_id).await {
        Ok(Some(rubric)) => rubric,
        Ok(None) => return Ok(rubric_not_found()),
        Err(e) => return Ok(internal_error("Error al modificar la rúbrica", e)),
    };

    // 无权修改时按不存在处理
    let target = Target::owned_by(rubric.owner).shared_template(rubric.is_general());
    if let Err(denial) = authorize(
        Action::Update(UpdateIntent::Full),
        Resource::Rubric,
        caller.as_ref(),
        &target,
    ) {
        return Ok(denial_response(
            denial,
            ErrorCode::RubricNotFound,
            "Rúbrica no encontrada o no tienes permiso para modificarla.",
        ));
    }

    if let Some(name) = &update_data.name
        && let Err(msg) = validate_required_text("nombre_rubrica", name)
    {
        return Ok(bad_request(ErrorCode::ValidationFailed, msg));
    }
    if let Err(response) = ensure_selection_exists(
        &storage,
        update_data.category_ids.as_deref().unwrap_or_default(),
        update_data.criterion_ids.as_deref().unwrap_or_default(),
    )
    .await
    {
        return Ok(response);
    }

    match storage.update_rubric(rubric_id, update_data).await {
        Ok(Some(rubric)) => Ok(HttpResponse::Ok().json(rubric)),
        Ok(None) => Ok(rubric_not_found()),
        Err(e) => Ok(internal_error("Error al modificar la rúbrica", e)),
    }
}
