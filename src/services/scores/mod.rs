pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::ErrorCode;
use crate::models::scores::entities::Score;
use crate::models::scores::requests::{CreateScoreRequest, UpdateScoreRequest};
use crate::policy::{Action, Caller, Resource, Target, authorize};
use crate::storage::Storage;

use super::{bad_request, denial_response, internal_error, not_found};

pub struct ScoreService {
    storage: Option<Arc<dyn Storage>>,
}

impl ScoreService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
        super::resolve_storage(&self.storage, request)
    }

    // 只列出调用者自己的得分
    pub async fn list_scores(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_scores(self, request).await
    }

    pub async fn get_score(&self, request: &HttpRequest, score_id: i64) -> ActixResult<HttpResponse> {
        get::get_score(self, request, score_id).await
    }

    // 允许匿名创建
    pub async fn create_score(
        &self,
        request: &HttpRequest,
        score_data: CreateScoreRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_score(self, request, score_data).await
    }

    pub async fn update_score(
        &self,
        request: &HttpRequest,
        score_id: i64,
        update_data: UpdateScoreRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_score(self, request, score_id, update_data).await
    }

    pub async fn delete_score(
        &self,
        request: &HttpRequest,
        score_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_score(self, request, score_id).await
    }
}

fn score_not_found() -> HttpResponse {
    not_found(ErrorCode::ScoreNotFound, "Puntaje no encontrado")
}

async fn load_authorized_score(
    storage: &Arc<dyn Storage>,
    caller: Option<&Caller>,
    score_id: i64,
    action: Action,
    denied_message: &str,
) -> Result<Score, HttpResponse> {
    let score = match storage.get_score_by_id(score_id).await {
        Ok(Some(score)) => score,
        Ok(None) => return Err(score_not_found()),
        Err(e) => return Err(internal_error("Error al obtener puntaje", e)),
    };

    authorize(action, Resource::Score, caller, &Target::user(score.owner_id))
        .map_err(|denial| denial_response(denial, ErrorCode::ScoreNotFound, denied_message))?;

    Ok(score)
}

/// 检查得分引用的评估、标准与评分表
async fn ensure_references_exist(
    storage: &Arc<dyn Storage>,
    evaluation_id: Option<i64>,
    criterion_id: Option<i64>,
    rubric_id: Option<i64>,
) -> Result<(), HttpResponse> {
    if let Some(evaluation_id) = evaluation_id {
        match storage.get_evaluation_by_id(evaluation_id).await {
            Ok(Some(_)) => {}
            Ok(None) => {
                return Err(bad_request(
                    ErrorCode::EvaluationNotFound,
                    format!("La evaluación {evaluation_id} no existe"),
                ));
            }
            Err(e) => return Err(internal_error("Error al verificar la evaluación", e)),
        }
    }
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
