use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{RubricService, rubric_not_found};
use crate::middlewares::RequireJWT;
use crate::models::{ErrorCode, rubrics::entities::Rubric};
use crate::policy::{Action, Resource, Target, authorize};
use crate::services::{denial_response, internal_error};

pub async fn get_rubric(
    service: &RubricService,
    request: &HttpRequest,
    rubric_id: i64,
) -> ActixResult<HttpResponse> {
    match load_readable_rubric(service, request, rubric_id).await? {
        Ok(rubric) => Ok(HttpResponse::Ok().json(rubric)),
        Err(response) => Ok(response),
    }
}

/// 读取评分表并检查读权限，通用评分表无需登录
pub(super) async fn load_readable_rubric(
    service: &RubricService,
    request: &HttpRequest,
    rubric_id: i64,
) -> ActixResult<Result<Rubric, HttpResponse>> {
    let caller = RequireJWT::extract_caller(request);
    let storage = service.get_storage(request)?;

    let rubric = match storage.get_rubric_by_id(rubric_id).await {
        Ok(Some(rubric)) => rubric,
        Ok(None) => return Ok(Err(rubric_not_found())),
        Err(e) => return Ok(Err(internal_error("Error al obtener rúbrica", e))),
    };

    let target = Target::owned_by(rubric.owner).shared_template(rubric.is_general());
    if let Err(denial) = authorize(Action::Read, Resource::Rubric, caller.as_ref(), &target) {
        return Ok(Err(denial_response(
            denial,
            ErrorCode::RubricNotFound,
            "Acceso denegado. No tienes permiso para ver esta rúbrica.",
        )));
    }

    Ok(Ok(rubric))
}
