use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::softwares::requests::{CreateSoftwareRequest, UpdateSoftwareRequest};
use crate::services::SoftwareService;

// 懒加载的全局 SOFTWARE_SERVICE 实例
static SOFTWARE_SERVICE: Lazy<SoftwareService> = Lazy::new(SoftwareService::new_lazy);

pub async fn list_softwares(req: HttpRequest) -> ActixResult<HttpResponse> {
    SOFTWARE_SERVICE.list_softwares(&req).await
}

pub async fn get_software(
    req: HttpRequest,
    software_id: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    SOFTWARE_SERVICE
        .get_software(&req, software_id.into_inner())
        .await
}

pub async fn create_software(
    req: HttpRequest,
    software_data: web::Json<CreateSoftwareRequest>,
) -> ActixResult<HttpResponse> {
    SOFTWARE_SERVICE
        .create_software(&req, software_data.into_inner())
        .await
}

pub async fn update_software(
    req: HttpRequest,
    software_id: web::Path<i64>,
    update_data: web::Json<UpdateSoftwareRequest>,
) -> ActixResult<HttpResponse> {
    SOFTWARE_SERVICE
        .update_software(&req, software_id.into_inner(), update_data.into_inner())
        .await
}

pub async fn delete_software(
    req: HttpRequest,
    software_id: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    SOFTWARE_SERVICE
        .delete_software(&req, software_id.into_inner())
        .await
}

// 配置路由
pub fn configure_softwares_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/softwares")
            // 创建软件不强制登录
            .service(
                web::resource("/nuevo-software")
                    .route(web::post().to(create_software).wrap(middlewares::OptionalJWT)),
            )
            .service(
                web::scope("")
                    .wrap(middlewares::RequireJWT)
                    .route("", web::get().to(list_softwares))
                    .route("/actualizar/{id}", web::put().to(update_software))
                    .route("/eliminar/{id}", web::delete().to(delete_software))
                    .route("/{id}", web::get().to(get_software)),
            ),
    );
}
