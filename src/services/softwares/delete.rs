use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::{SoftwareService, load_authorized_software, software_not_found};
use crate::middlewares::RequireJWT;
use crate::policy::Action;
use crate::services::internal_error;

pub async fn delete_software(
    service: &SoftwareService,
    request: &HttpRequest,
    software_id: i64,
) -> ActixResult<HttpResponse> {
    let caller = RequireJWT::extract_caller(request);
    let storage = service.get_storage(request)?;

    if let Err(response) = load_authorized_software(
        &storage,
        caller.as_ref(),
        software_id,
        Action::Delete,
        "Acceso denegado. Solo el dueño o un administrador pueden eliminar este software.",
    )
    .await
    {
        return Ok(response);
    }

    match storage.delete_software(software_id).await {
        Ok(true) => {
            info!("Software {} deleted", software_id);
            Ok(HttpResponse::NoContent().finish())
        }
        Ok(false) => Ok(software_not_found()),
        Err(e) => Ok(internal_error("Error al eliminar software", e)),
    }
}
