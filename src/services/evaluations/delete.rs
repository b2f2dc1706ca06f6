use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::{EvaluationService, evaluation_not_found, load_authorized_evaluation};
use crate::middlewares::RequireJWT;
use crate::policy::Action;
use crate::services::internal_error;

pub async fn delete_evaluation(
    service: &EvaluationService,
    request: &HttpRequest,
    evaluation_id: i64,
) -> ActixResult<HttpResponse> {
    let caller = RequireJWT::extract_caller(request);
    let storage = service.get_storage(request)?;

    if let Err(response) = load_authorized_evaluation(
        &storage,
        caller.as_ref(),
        evaluation_id,
        Action::Delete,
        "Acceso denegado. Solo el administrador o el dueño de la evaluación pueden eliminarla.",
    )
    .await
    {
        return Ok(response);
    }

    match storage.delete_evaluation(evaluation_id).await {
        Ok(true) => {
            info!("Evaluation {} deleted", evaluation_id);
            Ok(HttpResponse::NoContent().finish())
        }
        Ok(false) => Ok(evaluation_not_found()),
        Err(e) => Ok(internal_error("Error al eliminar evaluación", e)),
    }
}
