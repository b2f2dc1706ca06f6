use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::CategoryService;
use crate::middlewares::RequireJWT;
use crate::models::{ErrorCode, categories::requests::CreateCategoryRequest};
use crate::policy::{Action, Resource, Target, authorize};
use crate::services::{bad_request, denial_response, internal_error};
use crate::utils::validate::validate_required_text;

pub async fn create_category(
    service: &CategoryService,
    request: &HttpRequest,
    category_data: CreateCategoryRequest,
) -> ActixResult<HttpResponse> {
    let caller = RequireJWT::extract_caller(request);

    if let Err(denial) = authorize(
        Action::Create,
        Resource::Category,
        caller.as_ref(),
        &Target::unowned(),
    ) {
        return Ok(denial_response(
            denial,
            ErrorCode::CategoryNotFound,
            "Acceso denegado. Solo el administrador puede crear categorías.",
        ));
    }

    if let Err(msg) = validate_required_text("nombre_categoria", &category_data.name) {
        return Ok(bad_request(ErrorCode::ValidationFailed, msg));
    }

    let storage = service.get_storage(request)?;
    match storage.create_category(category_data).await {
        Ok(category) => {
            info!("Category {} created", category.id);
            Ok(HttpResponse::Created().json(category))
        }
        Err(e) => Ok(internal_error("Error al crear categoría", e)),
    }
}
