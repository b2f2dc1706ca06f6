use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::{ScoreService, ensure_references_exist};
use crate::middlewares::RequireJWT;
use crate::models::{
    ErrorCode,
    scores::requests::{CreateScoreRequest, NewScore},
};
use crate::policy::{Action, Resource, Target, authorize};
use crate::services::{
    bad_request, denial_response, ensure_user_exists, internal_error, requested_owner,
};
use crate::utils::validate::validate_score;

pub async fn create_score(
    service: &ScoreService,
    request: &HttpRequest,
    score_data: CreateScoreRequest,
) -> ActixResult<HttpResponse> {
    let caller = RequireJWT::extract_caller(request);

    if let Err(msg) = validate_score(score_data.value) {
        return Ok(bad_request(ErrorCode::ScoreOutOfRange, msg));
    }

    let storage = service.get_storage(request)?;
    let owner_id = match ensure_user_exists(
        &storage,
        requested_owner(score_data.owner, caller.as_ref()),
    )
    .await
    {
        Ok(owner_id) => owner_id,
        Err(response) => return Ok(response),
    };

    if let Err(denial) = authorize(
        Action::Create,
        Resource::Score,
        caller.as_ref(),
        &Target::user(owner_id),
    ) {
        return Ok(denial_response(
            denial,
            ErrorCode::ScoreNotFound,
            "Acceso denegado. No puedes registrar puntajes a nombre de otro usuario.",
        ));
    }

    if let Err(response) = ensure_references_exist(
        &storage,
        Some(score_data.evaluation_id),
        Some(score_data.criterion_id),
        Some(score_data.rubric_id),
    )
    .await
    {
        return Ok(response);
    }

    let new_score = NewScore {
        rubric_id: score_data.rubric_id,
        criterion_id: score_data.criterion_id,
        evaluation_id: score_data.evaluation_id,
        owner_id,
        value: score_data.value,
    };

    match storage.create_score(new_score).await {
        Ok(score) => {
            info!(
                "Score {} recorded for evaluation {}",
                score.id, score.evaluation_id
            );
            Ok(HttpResponse::Created().json(score))
        }
        Err(e) => Ok(internal_error("Error al crear puntaje", e)),
    }
}
