use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::{EvaluationService, ensure_references_exist};
use crate::middlewares::RequireJWT;
use crate::models::{
    ErrorCode,
    evaluations::requests::{CreateEvaluationRequest, NewEvaluation},
};
use crate::policy::{Action, Resource, Target, authorize};
use crate::services::{denial_response, internal_error, unauthenticated};

pub async fn create_evaluation(
    service: &EvaluationService,
    request: &HttpRequest,
    evaluation_data: CreateEvaluationRequest,
) -> ActixResult<HttpResponse> {
    let Some(caller) = RequireJWT::extract_caller(request) else {
        return Ok(unauthenticated());
    };

    if let Err(denial) = authorize(
        Action::Create,
        Resource::Evaluation,
        Some(&caller),
        &Target::user(caller.id),
    ) {
        return Ok(denial_response(
            denial,
            ErrorCode::EvaluationNotFound,
            "Acceso denegado. No tienes permiso para crear evaluaciones.",
        ));
    }

    let storage = service.get_storage(request)?;
    if let Err(response) = ensure_references_exist(
        &storage,
        Some(evaluation_data.software_id),
        Some(evaluation_data.rubric_id),
    )
    .await
    {
        return Ok(response);
    }

    let new_evaluation = NewEvaluation {
        software_id: evaluation_data.software_id,
        rubric_id: evaluation_data.rubric_id,
        owner_id: caller.id,
        total_score: evaluation_data.total_score,
        average: evaluation_data.average,
        completed: evaluation_data.completed,
    };

    match storage.create_evaluation(new_evaluation).await {
        Ok(evaluation) => {
            info!(
                "Evaluation {} created for software {} by user {}",
                evaluation.id, evaluation.software_id, caller.id
            );
            Ok(HttpResponse::Created().json(evaluation))
        }
        Err(e) => Ok(internal_error("Error al crear evaluación", e)),
    }
}
