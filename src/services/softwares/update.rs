use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{SoftwareService, load_authorized_software, software_not_found};
use crate::middlewares::RequireJWT;
use crate::models::{ErrorCode, softwares::requests::UpdateSoftwareRequest};
use crate::policy::{Action, UpdateIntent};
use crate::services::{bad_request, internal_error};
use crate::utils::validate::validate_required_text;

pub async fn update_software(
    service: &SoftwareService,
    request: &HttpRequest,
    software_id: i64,
    update_data: UpdateSoftwareRequest,
) -> ActixResult<HttpResponse> {
    let caller = RequireJWT::extract_caller(request);
    let storage = service.get_storage(request)?;

    if let Err(response) = load_authorized_software(
        &storage,
        caller.as_ref(),
        software_id,
        Action::Update(UpdateIntent::Full),
        "Acceso denegado. Solo el dueño o un administrador pueden modificar este software.",
    )
    .await
    {
        return Ok(response);
    }

    if let Some(name) = &update_data.name
        && let Err(msg) = validate_required_text("nombre_software", name)
    {
        return Ok(bad_request(ErrorCode::ValidationFailed, msg));
    }

    match storage.update_software(software_id, update_data).await {
        Ok(Some(software)) => Ok(HttpResponse::Ok().json(software)),
        Ok(None) => Ok(software_not_found()),
        Err(e) => Ok(internal_error("Error al modificar software", e)),
    }
}
