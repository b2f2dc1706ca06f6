use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{QuestionService, ensure_references_exist, question_not_found};
use crate::middlewares::RequireJWT;
use crate::models::{ErrorCode, questions::requests::UpdateQuestionRequest};
use crate::policy::{Action, Resource, Target, UpdateIntent, authorize};
use crate::services::{bad_request, denial_response, internal_error};
use crate::utils::validate::validate_required_text;

pub async fn update_question(
    service: &QuestionService,
    request: &HttpRequest,
    question_id: i64,
    update_data: UpdateQuestionRequest,
) -> ActixResult<HttpResponse> {
    let caller = RequireJWT::extract_caller(request);
    let storage = service.get_storage(request)?;

    let question = match storage.get_question_by_id(question_id).await {
        Ok(Some(question)) => question,
        Ok(None) => return Ok(question_not_found()),
        Err(e) => return Ok(internal_error("Error al modificar la pregunta", e)),
    };

    if let Err(denial) = authorize(
        Action::Update(UpdateIntent::Full),
        Resource::Question,
        caller.as_ref(),
        &Target::owned_by(question.owner),
    ) {
        return Ok(denial_response(
            denial,
            ErrorCode::QuestionNotFound,
            "Acceso denegado. No tienes permiso para editar esta pregunta.",
        ));
    }

    if let Some(text) = &update_data.text
        && let Err(msg) = validate_required_text("pregunta", text)
    {
        return Ok(bad_request(ErrorCode::ValidationFailed, msg));
    }
    if let Err(response) =
        ensure_references_exist(&storage, update_data.criterion_id, update_data.rubric_id).await
    {
        return Ok(response);
    }

    match storage.update_question(question_id, update_data).await {
        Ok(Some(question)) => Ok(HttpResponse::Ok().json(question)),
        Ok(None) => Ok(question_not_found()),
        Err(e) => Ok(internal_error("Error al modificar la pregunta", e)),
    }
}
