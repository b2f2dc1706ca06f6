use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{SoftwareService, load_authorized_software};
use crate::middlewares::RequireJWT;
use crate::policy::Action;

pub async fn get_software(
    service: &SoftwareService,
    request: &HttpRequest,
    software_id: i64,
) -> ActixResult<HttpResponse> {
    let caller = RequireJWT::extract_caller(request);
    let storage = service.get_storage(request)?;

    match load_authorized_software(
        &storage,
        caller.as_ref(),
        software_id,
        Action::Read,
        "Acceso denegado. No tienes permiso para ver este software.",
    )
    .await
    {
        Ok(software) => Ok(HttpResponse::Ok().json(software)),
        Err(response) => Ok(response),
    }
}
