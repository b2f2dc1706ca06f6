use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::{ScoreService, load_authorized_score, score_not_found};
use crate::middlewares::RequireJWT;
use crate::policy::Action;
use crate::services::internal_error;

pub async fn delete_score(
    service: &ScoreService,
    request: &HttpRequest,
    score_id: i64,
) -> ActixResult<HttpResponse> {
    let caller = RequireJWT::extract_caller(request);
    let storage = service.get_storage(request)?;

    if let Err(response) = load_authorized_score(
        &storage,
        caller.as_ref(),
        score_id,
        Action::Delete,
        "Acceso denegado. No tienes permiso para eliminar este puntaje.",
    )
    .await
    {
        return Ok(response);
    }

    match storage.delete_score(score_id).await {
        Ok(true) => {
            info!("Score {} deleted", score_id);
            Ok(HttpResponse::NoContent().finish())
        }
        Ok(false) => Ok(score_not_found()),
        Err(e) => Ok(internal_error("Error al eliminar puntaje", e)),
    }
}
