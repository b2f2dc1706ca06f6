use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::{RubricService, rubric_not_found};
use crate::middlewares::RequireJWT;
use crate::models::ErrorCode;
use crate::policy::{Action, Resource, Target, authorize};
use crate::services::{denial_response, internal_error};

pub async fn delete_rubric(
    service: &RubricService,
    request: &HttpRequest,
    rubric_id: i64,
) -> ActixResult<HttpResponse> {
    let caller = RequireJWT::extract_caller(request);
    let storage = service.get_storage(request)?;

    let rubric = match storage.get_rubric_by_id(rubric_id).await {
        Ok(Some(rubric)) => rubric,
        Ok(None) => return Ok(rubric_not_found()),
        Err(e) => return Ok(internal_error("Error al eliminar la rúbrica", e)),
    };

    // 通用评分表只有管理员可以删除
    let target = Target::owned_by(rubric.owner).shared_template(rubric.is_general());
    if let Err(denial) = authorize(Action::Delete, Resource::Rubric, caller.as_ref(), &target) {
        let message = if rubric.is_general() {
            "No tienes permisos para eliminar la rúbrica general."
        } else {
            "No tienes permiso para eliminar esta rúbrica."
        };
        return Ok(denial_response(denial, ErrorCode::RubricNotFound, message));
    }

    match storage.delete_rubric(rubric_id).await {
        Ok(true) => {
            info!("Rubric {} deleted", rubric_id);
            Ok(HttpResponse::NoContent().finish())
        }
        Ok(false) => Ok(rubric_not_found()),
        Err(e) => Ok(internal_error("Error al eliminar la rúbrica", e)),
    }
}
