use actix_web::error::{InternalError, JsonPayloadError, PathError, QueryPayloadError};
use actix_web::{Error, HttpRequest, HttpResponse};
use tracing::debug;

use crate::models::{ApiResponse, ErrorCode};

pub const INVALID_BODY: &str = "Cuerpo de la petición inválido";
pub const INVALID_QUERY: &str = "Parámetros de consulta inválidos";
pub const INVALID_PATH: &str = "El identificador debe ser un número entero";

// 解析器的原始错误只写日志，响应体只用固定文案
fn bad_request(message: &'static str) -> Error {
    let response =
        HttpResponse::BadRequest().json(ApiResponse::error_empty(ErrorCode::BadRequest, message));
    InternalError::from_response(message, response).into()
}

/// JSON 请求体解析失败
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> Error {
    debug!("Rejected JSON body on {}: {}", req.path(), err);
    let message = match &err {
        JsonPayloadError::ContentType => {
            "El cuerpo de la petición debe ser JSON (Content-Type: application/json)"
        }
        JsonPayloadError::Overflow { .. } | JsonPayloadError::OverflowKnownLength { .. } => {
            "El cuerpo de la petición es demasiado grande"
        }
        _ => INVALID_BODY,
    };
    bad_request(message)
}

/// 查询参数解析失败
pub fn query_error_handler(err: QueryPayloadError, req: &HttpRequest) -> Error {
    debug!("Rejected query string on {}: {}", req.path(), err);
    bad_request(INVALID_QUERY)
}

/// 路径参数解析失败，例如 `/categorias/abc`
pub fn path_error_handler(err: PathError, req: &HttpRequest) -> Error {
    debug!("Rejected path parameter on {}: {}", req.path(), err);
    bad_request(INVALID_PATH)
}
