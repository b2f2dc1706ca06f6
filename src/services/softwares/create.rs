use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::SoftwareService;
use crate::middlewares::RequireJWT;
use crate::models::{
    ErrorCode,
    softwares::requests::{CreateSoftwareRequest, NewSoftware},
};
use crate::policy::{Action, Resource, Target, authorize};
use crate::services::{
    bad_request, denial_response, ensure_user_exists, internal_error, requested_owner,
};
use crate::utils::validate::validate_required_text;

pub async fn create_software(
    service: &SoftwareService,
    request: &HttpRequest,
    software_data: CreateSoftwareRequest,
) -> ActixResult<HttpResponse> {
    let caller = RequireJWT::extract_caller(request);
    let storage = service.get_storage(request)?;

    if let Err(msg) = validate_required_text("nombre_software", &software_data.name) {
        return Ok(bad_request(ErrorCode::ValidationFailed, msg));
    }

    // 软件必须属于某个真实用户
    let owner_id = match ensure_user_exists(
        &storage,
        requested_owner(software_data.owner, caller.as_ref()),
    )
    .await
    {
        Ok(owner_id) => owner_id,
        Err(response) => return Ok(response),
    };

    if let Err(denial) = authorize(
        Action::Create,
        Resource::Software,
        caller.as_ref(),
        &Target::user(owner_id),
    ) {
        return Ok(denial_response(
            denial,
            ErrorCode::SoftwareNotFound,
            "Acceso denegado. No puedes registrar software a nombre de otro usuario.",
        ));
    }

    let new_software = NewSoftware {
        name: software_data.name,
        description: software_data.description,
        release_date: software_data.release_date,
        owner_id,
    };

    match storage.create_software(new_software).await {
        Ok(software) => {
            info!("Software {} created for user {}", software.id, owner_id);
            Ok(HttpResponse::Created().json(software))
        }
        Err(e) => Ok(internal_error("Error al crear software", e)),
    }
}
