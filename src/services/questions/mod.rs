pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::ErrorCode;
use crate::models::questions::requests::{CreateQuestionRequest, UpdateQuestionRequest};
use crate::storage::Storage;

use super::{bad_request, internal_error, not_found};

pub struct QuestionService {
    storage: Option<Arc<dyn Storage>>,
}

impl QuestionService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
        super::resolve_storage(&self.storage, request)
    }

    pub async fn list_questions(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_questions(self, request).await
    }

    // 分类下可见的标准及其问题
    pub async fn list_questions_by_category(
        &self,
        request: &HttpRequest,
        category_id: i64,
    ) -> ActixResult<HttpResponse> {
        list::list_questions_by_category(self, request, category_id).await
    }

    pub async fn get_question(
        &self,
        request: &HttpRequest,
        question_id: i64,
    ) -> ActixResult<HttpResponse> {
        get::get_question(self, request, question_id).await
    }

    pub async fn create_question(
        &self,
        request: &HttpRequest,
        question_data: CreateQuestionRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_question(self, request, question_data).await
    }

    pub async fn update_question(
        &self,
        request: &HttpRequest,
        question_id: i64,
        update_data: UpdateQuestionRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_question(self, request, question_id, update_data).await
    }

    pub async fn delete_question(
        &self,
        request: &HttpRequest,
        question_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_question(self, request, question_id).await
    }
}

fn question_not_found() -> HttpResponse {
    not_found(ErrorCode::QuestionNotFound, "Pregunta no encontrada")
}

/// 检查问题引用的标准与评分表
async fn ensure_references_exist(
    storage: &Arc<dyn Storage>,
    criterion_id: Option<i64>,
    rubric_id: Option<i64>,
) -> Result<(), HttpResponse> {
    if let Some(criterion_id) = criterion_id {
        match storage.get_criterion_by_id(criterion_id).await {
            Ok(Some(_)) => {}
            Ok(None) => {
                return Err(bad_request(
                    ErrorCode::CriterionNotFound,
                    format!("El criterio {criterion_id} no existe"),
                ));
            }
            Err(e) => return Err(internal_error("Error al verificar el criterio", e)),
        }
    }
    if let Some(rubric_id) = rubric_id {
        match storage.get_rubric_by_id(rubric_id).await {
            Ok(Some(_)) => {}
            Ok(None) => {
                return Err(bad_request(
                    ErrorCode::RubricNotFound,
                    format!("La rúbrica {rubric_id} no existe"),
                ));
            }
            Err(e) => return Err(internal_error("Error al verificar la rúbrica", e)),
        }
    }
    Ok(())
}
