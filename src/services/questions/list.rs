use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::QuestionService;
use crate::middlewares::RequireJWT;
use crate::models::{ErrorCode, OwnershipFilter, questions::responses::CriterionQuestionsGroup};
use crate::policy::{Caller, Resource, list_scope};
use crate::services::{denial_response, internal_error, not_found, unauthenticated};

fn scope_for(resource: Resource, caller: &Caller) -> Result<OwnershipFilter, HttpResponse> {
    list_scope(resource, caller).map_err(|denial| {
        denial_response(
            denial,
            ErrorCode::QuestionNotFound,
            "Acceso denegado. No tienes permiso para ver preguntas.",
        )
    })
}

pub async fn list_questions(
    service: &QuestionService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(caller) = RequireJWT::extract_caller(request) else {
        return Ok(unauthenticated());
    };
    let scope = match scope_for(Resource::Question, &caller) {
        Ok(scope) => scope,
        Err(response) => return Ok(response),
    };

    let storage = service.get_storage(request)?;
    match storage.list_questions(scope, None).await {
        Ok(questions) => Ok(HttpResponse::Ok().json(questions)),
        Err(e) => Ok(internal_error("Error al obtener preguntas", e)),
    }
}

pub async fn list_questions_by_category(
    service: &QuestionService,
    request: &HttpRequest,
    category_id: i64,
) -> ActixResult<HttpResponse> {
    let Some(caller) = RequireJWT::extract_caller(request) else {
        return Ok(unauthenticated());
    };
    let (criterion_scope, question_scope) = match (
        scope_for(Resource::Criterion, &caller),
        scope_for(Resource::Question, &caller),
    ) {
        (Ok(criteria), Ok(questions)) => (criteria, questions),
        (Err(response), _) | (_, Err(response)) => return Ok(response),
    };

    let storage = service.get_storage(request)?;
    let criteria = match storage
        .list_criteria(criterion_scope, Some(category_id))
        .await
    {
        Ok(criteria) => criteria,
        Err(e) => return Ok(internal_error("Error al obtener preguntas", e)),
    };

    if criteria.is_empty() {
        return Ok(not_found(
            ErrorCode::CriterionNotFound,
            "No se encontraron criterios para esta categoría",
        ));
    }

    let mut groups = Vec::with_capacity(criteria.len());
    for criterion in criteria {
        let questions = match storage
            .list_questions(question_scope, Some(criterion.id))
            .await
        {
            Ok(questions) => questions,
            Err(e) => return Ok(internal_error("Error al obtener preguntas", e)),
        };
        groups.push(CriterionQuestionsGroup {
            criterion,
            questions,
        });
    }

    Ok(HttpResponse::Ok().json(groups))
}
