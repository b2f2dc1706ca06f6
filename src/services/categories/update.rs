use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{CategoryService, category_not_found};
use crate::middlewares::RequireJWT;
use crate::models::{ErrorCode, categories::requests::UpdateCategoryRequest};
use crate::policy::{Action, Resource, Target, UpdateIntent, authorize};
use crate::services::{bad_request, denial_response, internal_error};
use crate::utils::validate::validate_required_text;

pub async fn update_category(
    service: &CategoryService,
    request: &HttpRequest,
    category_id: i64,
    update_data: UpdateCategoryRequest,
) -> ActixResult<HttpResponse> {
    let caller = RequireJWT::extract_caller(request);

    if let Err(denial) = authorize(
        Action::Update(UpdateIntent::Full),
        Resource::Category,
        caller.as_ref(),
        &Target::unowned(),
    ) {
        return Ok(denial_response(
            denial,
            ErrorCode::CategoryNotFound,
            "Acceso denegado. Solo el administrador puede actualizar categorías.",
        ));
    }

    if let Some(name) = &update_data.name
        && let Err(msg) = validate_required_text("nombre_categoria", name)
    {
        return Ok(bad_request(ErrorCode::ValidationFailed, msg));
    }

    let storage = service.get_storage(request)?;
    match storage.update_category(category_id, update_data).await {
        Ok(Some(category)) => Ok(HttpResponse::Ok().json(category)),
        Ok(None) => Ok(category_not_found()),
        Err(e) => Ok(internal_error("Error al modificar categoría", e)),
    }
}
