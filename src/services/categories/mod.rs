pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::ErrorCode;
use crate::models::categories::requests::{CreateCategoryRequest, UpdateCategoryRequest};
use crate::storage::Storage;

use super::not_found;

pub struct CategoryService {
    storage: Option<Arc<dyn Storage>>,
}

impl CategoryService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
        super::resolve_storage(&self.storage, request)
    }

    pub async fn list_categories(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_categories(self, request).await
    }

    pub async fn get_category(
        &self,
        request: &HttpRequest,
        category_id: i64,
    ) -> ActixResult<HttpResponse> {
        get::get_category(self, request, category_id).await
    }

    pub async fn create_category(
        &self,
        request: &HttpRequest,
        category_data: CreateCategoryRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_category(self, request, category_data).await
    }

    pub async fn update_category(
        &self,
        request: &HttpRequest,
        category_id: i64,
        update_data: UpdateCategoryRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_category(self, request, category_id, update_data).await
    }

    pub async fn delete_category(
        &self,
        request: &HttpRequest,
        category_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_category(self, request, category_id).await
    }
}

fn category_not_found() -> HttpResponse {
    not_found(ErrorCode::CategoryNotFound, "Categoría no encontrada")
}
