use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::warn;

use super::{EvaluationService, load_authorized_evaluation};
use crate::middlewares::RequireJWT;
use crate::models::{
    ErrorCode,
    evaluations::responses::{
        CompleteEvaluation, CompleteEvaluationBody, RubricSummary, SoftwareSummary,
    },
};
use crate::policy::Action;
use crate::services::{internal_error, not_found};

const FAILURE_MESSAGE: &str = "Error al obtener la evaluación completa";

pub async fn get_complete_evaluation(
    service: &EvaluationService,
    request: &HttpRequest,
    evaluation_id: i64,
) -> ActixResult<HttpResponse> {
    let caller = RequireJWT::extract_caller(request);
    let storage = service.get_storage(request)?;

    let evaluation = match load_authorized_evaluation(
        &storage,
        caller.as_ref(),
        evaluation_id,
        Action::Read,
        "Acceso denegado. Solo el administrador o el dueño pueden ver esta evaluación.",
    )
    .await
    {
        Ok(evaluation) => evaluation,
        Err(response) => return Ok(response),
    };

    let software = match storage.get_software_by_id(evaluation.software_id).await {
        Ok(Some(software)) => software,
        Ok(None) => {
            warn!(
                "Evaluation {} references missing software {}",
                evaluation.id, evaluation.software_id
            );
            return Ok(not_found(ErrorCode::SoftwareNotFound, "Software no encontrado"));
        }
        Err(e) => return Ok(internal_error(FAILURE_MESSAGE, e)),
    };

    let rubric = match storage.get_rubric_by_id(evaluation.rubric_id).await {
        Ok(Some(rubric)) => rubric,
        Ok(None) => {
            warn!(
                "Evaluation {} references missing rubric {}",
                evaluation.id, evaluation.rubric_id
            );
            return Ok(not_found(ErrorCode::RubricNotFound, "Rúbrica no encontrada"));
        }
        Err(e) => return Ok(internal_error(FAILURE_MESSAGE, e)),
    };

    let scores = match storage.list_scores_by_evaluation(evaluation.id).await {
        Ok(scores) => scores,
        Err(e) => return Ok(internal_error(FAILURE_MESSAGE, e)),
    };

    Ok(HttpResponse::Ok().json(CompleteEvaluation {
        evaluacion: CompleteEvaluationBody {
            id_evaluacion: evaluation.id,
            puntaje_total: evaluation.total_score,
            promedio: evaluation.average,
            terminado: evaluation.completed,
            fecha_evaluacion: evaluation.evaluated_at,
            software: SoftwareSummary {
                id: software.id,
                name: software.name,
                description: software.description,
            },
            rubrica: RubricSummary {
                id_rubrica: rubric.id,
                nombre_rubrica: rubric.name,
            },
            puntajes_criterio: scores,
        },
    }))
}
