use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{CategoryService, category_not_found};
use crate::services::internal_error;

pub async fn get_category(
    service: &CategoryService,
    request: &HttpRequest,
    category_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    match storage.get_category_by_id(category_id).await {
        Ok(Some(category)) => Ok(HttpResponse::Ok().json(category)),
        Ok(None) => Ok(category_not_found()),
        Err(e) => Ok(internal_error("Error al obtener categoría", e)),
    }
}
