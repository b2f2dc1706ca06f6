use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::{CategoryService, category_not_found};
use crate::middlewares::RequireJWT;
use crate::models::ErrorCode;
use crate::policy::{Action, Resource, Target, authorize};
use crate::services::{denial_response, internal_error};

pub async fn delete_category(
    service: &CategoryService,
    request: &HttpRequest,
    category_id: i64,
) -> ActixResult<HttpResponse> {
    let caller = RequireJWT::extract_caller(request);

    if let Err(denial) = authorize(
        Action::Delete,
        Resource::Category,
        caller.as_ref(),
        &Target::unowned(),
    ) {
        return Ok(denial_response(
            denial,
            ErrorCode::CategoryNotFound,
            "Acceso denegado. Solo el administrador puede eliminar categorías.",
        ));
    }

    let storage = service.get_storage(request)?;
    match storage.delete_category(category_id).await {
        Ok(true) => {
            info!("Category {} deleted", category_id);
            Ok(HttpResponse::NoContent().finish())
        }
        Ok(false) => Ok(category_not_found()),
        Err(e) => Ok(internal_error("Error al eliminar categoría", e)),
    }
}
