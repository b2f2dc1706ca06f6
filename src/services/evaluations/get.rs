use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{EvaluationService, load_authorized_evaluation};
use crate::middlewares::RequireJWT;
use crate::policy::Action;

pub async fn get_evaluation(
    service: &EvaluationService,
    request: &HttpRequest,
    evaluation_id: i64,
) -> ActixResult<HttpResponse> {
    let caller = RequireJWT::extract_caller(request);
    let storage = service.get_storage(request)?;

    match load_authorized_evaluation(
        &storage,
        caller.as_ref(),
        evaluation_id,
        Action::Read,
        "Acceso denegado. Solo el administrador o el dueño de la evaluación pueden verla.",
    )
    .await
    {
        Ok(evaluation) => Ok(HttpResponse::Ok().json(evaluation)),
        Err(response) => Ok(response),
    }
}
