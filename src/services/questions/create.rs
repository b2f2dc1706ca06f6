use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::{QuestionService, ensure_references_exist};
use crate::middlewares::RequireJWT;
use crate::models::{
    ErrorCode,
    questions::requests::{CreateQuestionRequest, NewQuestion},
};
use crate::policy::{Action, Resource, Target, authorize};
use crate::services::{
    bad_request, denial_response, internal_error, requested_owner, unauthenticated,
};
use crate::utils::validate::validate_required_text;

pub async fn create_question(
    service: &QuestionService,
    request: &HttpRequest,
    question_data: CreateQuestionRequest,
) -> ActixResult<HttpResponse> {
    let caller = RequireJWT::extract_caller(request);
    let Some(owner) = requested_owner(question_data.owner, caller.as_ref()) else {
        return Ok(unauthenticated());
    };

    // 只有标准用户可以创建问题，且只能为自己创建
    if let Err(denial) = authorize(
        Action::Create,
        Resource::Question,
        caller.as_ref(),
        &Target::owned_by(owner),
    ) {
        return Ok(denial_response(
            denial,
            ErrorCode::QuestionNotFound,
            "No tienes permisos para crear preguntas.",
        ));
    }

    if let Err(msg) = validate_required_text("pregunta", &question_data.text) {
        return Ok(bad_request(ErrorCode::ValidationFailed, msg));
    }

    let storage = service.get_storage(request)?;
    if let Err(response) = ensure_references_exist(
        &storage,
        Some(question_data.criterion_id),
        question_data.rubric_id,
    )
    .await
    {
        return Ok(response);
    }

    let new_question = NewQuestion {
        text: question_data.text,
        criterion_id: question_data.criterion_id,
        rubric_id: question_data.rubric_id,
        owner,
    };

    match storage.create_question(new_question).await {
        Ok(question) => {
            info!(
                "Question {} created for criterion {}",
                question.id, question.criterion_id
            );
            Ok(HttpResponse::Created().json(question))
        }
        Err(e) => Ok(internal_error("Error al crear la pregunta", e)),
    }
}
