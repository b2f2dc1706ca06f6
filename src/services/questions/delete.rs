use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::{QuestionService, question_not_found};
use crate::middlewares::RequireJWT;
use crate::models::ErrorCode;
use crate::policy::{Action, Resource, Target, authorize};
use crate::services::{denial_response, internal_error};

pub async fn delete_question(
    service: &QuestionService,
    request: &HttpRequest,
    question_id: i64,
) -> ActixResult<HttpResponse> {
    let caller = RequireJWT::extract_caller(request);
    let storage = service.get_storage(request)?;

    let question = match storage.get_question_by_id(question_id).await {
        Ok(Some(question)) => question,
        Ok(None) => return Ok(question_not_found()),
        Err(e) => return Ok(internal_error("Error al eliminar la pregunta", e)),
    };

    if let Err(denial) = authorize(
        Action::Delete,
        Resource::Question,
        caller.as_ref(),
        &Target::owned_by(question.owner),
    ) {
        return Ok(denial_response(
            denial,
            ErrorCode::QuestionNotFound,
            "Acceso denegado. No tienes permiso para eliminar esta pregunta.",
        ));
    }

    match storage.delete_question(question_id).await {
        Ok(true) => {
            info!("Question {} deleted", question_id);
            Ok(HttpResponse::NoContent().finish())
        }
        Ok(false) => Ok(question_not_found()),
        Err(e) => Ok(internal_error("Error al eliminar la pregunta", e)),
    }
}
