use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::CategoryService;
use crate::services::internal_error;

// 分类对所有人可见
pub async fn list_categories(
    service: &CategoryService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    match storage.list_categories().await {
        Ok(categories) => Ok(HttpResponse::Ok().json(categories)),
        Err(e) => Ok(internal_error("Error al obtener categorías", e)),
    }
}
