use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{ScoreService, ensure_references_exist, load_authorized_score, score_not_found};
use crate::middlewares::RequireJWT;
use crate::models::{ErrorCode, scores::requests::UpdateScoreRequest};
use crate::policy::{Action, UpdateIntent};
use crate::services::{bad_request, internal_error};
use crate::utils::validate::validate_score;

pub async fn update_score(
    service: &ScoreService,
    request: &HttpRequest,
    score_id: i64,
    update_data: UpdateScoreRequest,
) -> ActixResult<HttpResponse> {
    let caller = RequireJWT::extract_caller(request);
    let storage = service.get_storage(request)?;

    if let Err(response) = load_authorized_score(
        &storage,
        caller.as_ref(),
        score_id,
        Action::Update(UpdateIntent::Full),
        "Acceso denegado. No tienes permiso para editar este puntaje.",
    )
    .await
    {
        return Ok(response);
    }

    if let Some(value) = update_data.value
        && let Err(msg) = validate_score(value)
    {
        return Ok(bad_request(ErrorCode::ScoreOutOfRange, msg));
    }
    if let Err(response) = ensure_references_exist(
        &storage,
        update_data.evaluation_id,
        update_data.criterion_id,
        update_data.rubric_id,
    )
    .await
    {
        return Ok(response);
    }

    match storage.update_score(score_id, update_data).await {
        Ok(Some(score)) => Ok(HttpResponse::Ok().json(score)),
        Ok(None) => Ok(score_not_found()),
        Err(e) => Ok(internal_error("Error al modificar puntaje", e)),
    }
}
