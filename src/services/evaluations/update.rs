use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, http::StatusCode};

use super::{
    EvaluationService, ensure_references_exist, evaluation_not_found,
    load_authorized_evaluation,
};
use crate::middlewares::RequireJWT;
use crate::models::{ErrorCode, evaluations::requests::UpdateEvaluationRequest};
use crate::policy::{Action, Resource, Target, UpdateIntent, authorize};
use crate::services::{error_response, internal_error};

pub async fn update_evaluation(
    service: &EvaluationService,
    request: &HttpRequest,
    evaluation_id: i64,
    update_data: UpdateEvaluationRequest,
) -> ActixResult<HttpResponse> {
    let caller = RequireJWT::extract_caller(request);
    let storage = service.get_storage(request)?;
    let action = Action::Update(UpdateIntent::Full);

    let evaluation = match load_authorized_evaluation(
        &storage,
        caller.as_ref(),
        evaluation_id,
        action,
        "Acceso denegado. Solo el administrador o el dueño de la evaluación pueden modificarla.",
    )
    .await
    {
        Ok(evaluation) => evaluation,
        Err(response) => return Ok(response),
    };

    // 已完成的评估不可再修改
    let locked = Target::user(evaluation.owner_id).locked(evaluation.completed);
    if authorize(action, Resource::Evaluation, caller.as_ref(), &locked).is_err() {
        return Ok(error_response(
            StatusCode::FORBIDDEN,
            ErrorCode::EvaluationCompleted,
            "No se puede modificar la evaluación porque ya está terminada.",
        ));
    }

    if let Err(response) =
        ensure_references_exist(&storage, update_data.software_id, update_data.rubric_id).await
    {
        return Ok(response);
    }

    match storage.update_evaluation(evaluation_id, update_data).await {
        Ok(Some(evaluation)) => Ok(HttpResponse::Ok().json(evaluation)),
        Ok(None) => Ok(evaluation_not_found()),
        Err(e) => Ok(internal_error("Error al modificar evaluación", e)),
    }
}
