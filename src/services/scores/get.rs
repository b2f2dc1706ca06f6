use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{ScoreService, load_authorized_score};
use crate::middlewares::RequireJWT;
use crate::policy::Action;

pub async fn get_score(
    service: &ScoreService,
    request: &HttpRequest,
    score_id: i64,
) -> ActixResult<HttpResponse> {
    let caller = RequireJWT::extract_caller(request);
    let storage = service.get_storage(request)?;

    match load_authorized_score(
        &storage,
        caller.as_ref(),
        score_id,
        Action::Read,
        "Acceso denegado. No tienes permiso para ver este puntaje.",
    )
    .await
    {
        Ok(score) => Ok(HttpResponse::Ok().json(score)),
        Err(response) => Ok(response),
    }
}
