pub mod complete;
pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::ErrorCode;
use crate::models::rubrics::requests::{CreateRubricRequest, UpdateRubricRequest};
use crate::storage::Storage;

use super::{bad_request, internal_error, not_found};

pub struct RubricService {
    storage: Option<Arc<dyn Storage>>,
}

impl RubricService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
        super::resolve_storage(&self.storage, request)
    }

    // 通用评分表加上调用者自己的评分表
    pub async fn list_rubrics(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_rubrics(self, request).await
    }

    pub async fn get_rubric(
        &self,
        request: &HttpRequest,
        rubric_id: i64,
    ) -> ActixResult<HttpResponse> {
        get::get_rubric(self, request, rubric_id).await
    }

    // 评分表 → 分类 → 选中的标准 → 问题
    pub async fn get_complete_rubric(
        &self,
        request: &HttpRequest,
        rubric_id: i64,
    ) -> ActixResult<HttpResponse> {
        complete::get_complete_rubric(self, request, rubric_id).await
    }

    pub async fn create_rubric(
        &self,
        request: &HttpRequest,
        rubric_data: CreateRubricRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_rubric(self, request, rubric_data).await
    }

    pub async fn update_rubric(
        &self,
        request: &HttpRequest,
        rubric_id: i64,
        update_data: UpdateRubricRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_rubric(self, request, rubric_id, update_data).await
    }

    pub async fn delete_rubric(
        &self,
        request: &HttpRequest,
        rubric_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_rubric(self, request, rubric_id).await
    }
}

fn rubric_not_found() -> HttpResponse {
    not_found(ErrorCode::RubricNotFound, "Rúbrica no encontrada")
}

/// 评分表选中的分类与标准必须存在
async fn ensure_selection_exists(
    storage: &Arc<dyn Storage>,
    category_ids: &[i64],
    criterion_ids: &[i64],
) -> Result<(), HttpResponse> {
    for &category_id in category_ids {
        match storage.get_category_by_id(category_id).await {
            Ok(Some(_)) => {}
            Ok(None) => {
                return Err(bad_request(
                    ErrorCode::CategoryNotFound,
                    format!("La categoría {category_id} no existe"),
                ));
            }
            Err(e) => return Err(internal_error("Error al verificar la rúbrica", e)),
        }
    }
    for &criterion_id in criterion_ids {
        match storage.get_criterion_by_id(criterion_id).await {
            Ok(Some(_)) => {}
            Ok(None) => {
                return Err(bad_request(
                    ErrorCode::CriterionNotFound,
                    format!("El criterio {criterion_id} no existe"),
                ));
            }
            Err(e) => return Err(internal_error("Error al verificar la rúbrica", e)),
        }
    }
    Ok(())
}
