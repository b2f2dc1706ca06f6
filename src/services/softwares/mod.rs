pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::ErrorCode;
use crate::models::softwares::entities::Software;
use crate::models::softwares::requests::{CreateSoftwareRequest, UpdateSoftwareRequest};
use crate::policy::{Action, Caller, Resource, Target, authorize};
use crate::storage::Storage;

use super::{denial_response, internal_error, not_found};

pub struct SoftwareService {
    storage: Option<Arc<dyn Storage>>,
}

impl SoftwareService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
        super::resolve_storage(&self.storage, request)
    }

    pub async fn list_softwares(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_softwares(self, request).await
    }

    pub async fn get_software(
        &self,
        request: &HttpRequest,
        software_id: i64,
    ) -> ActixResult<HttpResponse> {
        get::get_software(self, request, software_id).await
    }

    // 允许匿名创建
    pub async fn create_software(
        &self,
        request: &HttpRequest,
        software_data: CreateSoftwareRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_software(self, request, software_data).await
    }

    pub async fn update_software(
        &self,
        request: &HttpRequest,
        software_id: i64,
        update_data: UpdateSoftwareRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_software(self, request, software_id, update_data).await
    }

    pub async fn delete_software(
        &self,
        request: &HttpRequest,
        software_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_software(self, request, software_id).await
    }
}

fn software_not_found() -> HttpResponse {
    not_found(ErrorCode::SoftwareNotFound, "Software no encontrado")
}

/// 读取软件并按给定动作检查权限
async fn load_authorized_software(
    storage: &Arc<dyn Storage>,
    caller: Option<&Caller>,
    software_id: i64,
    action: Action,
    denied_message: &str,
) -> Result<Software, HttpResponse> {
    let software = match storage.get_software_by_id(software_id).await {
        Ok(Some(software)) => software,
        Ok(None) => return Err(software_not_found()),
        Err(e) => return Err(internal_error("Error al obtener software", e)),
    };

    authorize(
        action,
        Resource::Software,
        caller,
        &Target::user(software.owner_id),
    )
    .map_err(|denial| denial_response(denial, ErrorCode::SoftwareNotFound, denied_message))?;

    Ok(software)
}
