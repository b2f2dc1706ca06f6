pub mod complete;
pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::ErrorCode;
use crate::models::evaluations::entities::Evaluation;
use crate::models::evaluations::requests::{CreateEvaluationRequest, UpdateEvaluationRequest};
use crate::policy::{Action, Caller, Resource, Target, authorize};
use crate::storage::Storage;

use super::{bad_request, denial_response, internal_error, not_found};

pub struct EvaluationService {
    storage: Option<Arc<dyn Storage>>,
}

impl EvaluationService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
        super::resolve_storage(&self.storage, request)
    }

    pub async fn list_evaluations(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_evaluations(self, request).await
    }

    pub async fn get_evaluation(
        &self,
        request: &HttpRequest,
        evaluation_id: i64,
    ) -> ActixResult<HttpResponse> {
        get::get_evaluation(self, request, evaluation_id).await
    }

    // 评估 + 软件摘要 + 评分表摘要 + 全部得分
    pub async fn get_complete_evaluation(
        &self,
        request: &HttpRequest,
        evaluation_id: i64,
    ) -> ActixResult<HttpResponse> {
        complete::get_complete_evaluation(self, request, evaluation_id).await
    }

    pub async fn create_evaluation(
        &self,
        request: &HttpRequest,
        evaluation_data: CreateEvaluationRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_evaluation(self, request, evaluation_data).await
    }

    pub async fn update_evaluation(
        &self,
        request: &HttpRequest,
        evaluation_id: i64,
        update_data: UpdateEvaluationRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_evaluation(self, request, evaluation_id, update_data).await
    }

    pub async fn delete_evaluation(
        &self,
        request: &HttpRequest,
        evaluation_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_evaluation(self, request, evaluation_id).await
    }
}

fn evaluation_not_found() -> HttpResponse {
    not_found(ErrorCode::EvaluationNotFound, "Evaluación no encontrada")
}

async fn load_authorized_evaluation(
    storage: &Arc<dyn Storage>,
    caller: Option<&Caller>,
    evaluation_id: i64,
    action: Action,
    denied_message: &str,
) -> Result<Evaluation, HttpResponse> {
    let evaluation = match storage.get_evaluation_by_id(evaluation_id).await {
        Ok(Some(evaluation)) => evaluation,
        Ok(None) => return Err(evaluation_not_found()),
        Err(e) => return Err(internal_error("Error al obtener evaluación", e)),
    };

    authorize(
        action,
        Resource::Evaluation,
        caller,
        &Target::user(evaluation.owner_id),
    )
    .map_err(|denial| denial_response(denial, ErrorCode::EvaluationNotFound, denied_message))?;

    Ok(evaluation)
}

/// 评估引用的软件和评分表必须存在
async fn ensure_references_exist(
    storage: &Arc<dyn Storage>,
    software_id: Option<i64>,
    rubric_id: Option<i64>,
) -> Result<(), HttpResponse> {
    if let Some(software_id) = software_id {
        match storage.get_software_by_id(software_id).await {
            Ok(Some(_)) => {}
            Ok(None) => {
                return Err(bad_request(
                    ErrorCode::SoftwareNotFound,
                    format!("El software {software_id} no existe"),
                ));
            }
            Err(e) => return Err(internal_error("Error al verificar el software", e)),
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
