pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::ErrorCode;
use crate::models::criteria::requests::{CreateCriterionRequest, UpdateCriterionRequest};
use crate::storage::Storage;

use super::{bad_request, internal_error, not_found};

pub struct CriterionService {
    storage: Option<Arc<dyn Storage>>,
}

impl CriterionService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
        super::resolve_storage(&self.storage, request)
    }

    // 调用者可见的全部标准
    pub async fn list_criteria(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_criteria(self, request, None).await
    }

    // 某个分类下调用者可见的标准
    pub async fn list_criteria_by_category(
        &self,
        request: &HttpRequest,
        category_id: i64,
    ) -> ActixResult<HttpResponse> {
        list::list_criteria(self, request, Some(category_id)).await
    }

    pub async fn get_criterion(
        &self,
        request: &HttpRequest,
        criterion_id: i64,
    ) -> ActixResult<HttpResponse> {
        get::get_criterion(self, request, criterion_id).await
    }

    pub async fn create_criterion(
        &self,
        request: &HttpRequest,
        criterion_data: CreateCriterionRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_criterion(self, request, criterion_data).await
    }

    pub async fn update_criterion(
        &self,
        request: &HttpRequest,
        criterion_id: i64,
        update_data: UpdateCriterionRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_criterion(self, request, criterion_id, update_data).await
    }

    pub async fn delete_criterion(
        &self,
        request: &HttpRequest,
        criterion_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_criterion(self, request, criterion_id).await
    }
}

fn criterion_not_found() -> HttpResponse {
    not_found(ErrorCode::CriterionNotFound, "Criterio no encontrado")
}

/// 标准引用的分类必须存在
async fn ensure_category_exists(
    storage: &Arc<dyn Storage>,
    category_id: i64,
) -> Result<(), HttpResponse> {
    match storage.get_category_by_id(category_id).await {
        Ok(Some(_)) => Ok(()),
        Ok(None) => Err(bad_request(
            ErrorCode::CategoryNotFound,
            format!("La categoría {category_id} no existe"),
        )),
        Err(e) => Err(internal_error("Error al verificar la categoría", e)),
    }
}
