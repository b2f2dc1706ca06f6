use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::rubrics::requests::{CreateRubricRequest, UpdateRubricRequest};
use crate::services::RubricService;

// 懒加载的全局 RUBRIC_SERVICE 实例
static RUBRIC_SERVICE: Lazy<RubricService> = Lazy::new(RubricService::new_lazy);

pub async fn list_rubrics(req: HttpRequest) -> ActixResult<HttpResponse> {
    RUBRIC_SERVICE.list_rubrics(&req).await
}

pub async fn get_rubric(req: HttpRequest, rubric_id: web::Path<i64>) -> ActixResult<HttpResponse> {
    RUBRIC_SERVICE.get_rubric(&req, rubric_id.into_inner()).await
}

pub async fn get_complete_rubric(
    req: HttpRequest,
    rubric_id: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    RUBRIC_SERVICE
        .get_complete_rubric(&req, rubric_id.into_inner())
        .await
}

pub async fn create_rubric(
    req: HttpRequest,
    rubric_data: web::Json<CreateRubricRequest>,
) -> ActixResult<HttpResponse> {
    RUBRIC_SERVICE
        .create_rubric(&req, rubric_data.into_inner())
        .await
}

pub async fn update_rubric(
    req: HttpRequest,
    rubric_id: web::Path<i64>,
    update_data: web::Json<UpdateRubricRequest>,
) -> ActixResult<HttpResponse> {
    RUBRIC_SERVICE
        .update_rubric(&req, rubric_id.into_inner(), update_data.into_inner())
        .await
}

pub async fn delete_rubric(
    req: HttpRequest,
    rubric_id: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    RUBRIC_SERVICE
        .delete_rubric(&req, rubric_id.into_inner())
        .await
}

// 配置路由
pub fn configure_rubrics_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/rubricas")
            // 通用评分表可匿名读取
            .service(
                web::resource("/completa/{id_rubrica}").route(
                    web::get()
                        .to(get_complete_rubric)
                        .wrap(middlewares::OptionalJWT),
                ),
            )
            .service(
                web::resource("/nueva-rubrica")
                    .route(web::post().to(create_rubric).wrap(middlewares::RequireJWT)),
            )
            .service(
                web::resource("")
                    .route(web::get().to(list_rubrics).wrap(middlewares::RequireJWT)),
            )
            .service(
                web::resource("/actualizar/{id}")
                    .route(web::put().to(update_rubric).wrap(middlewares::RequireJWT)),
            )
            .service(
                web::resource("/eliminar/{id}")
                    .route(web::delete().to(delete_rubric).wrap(middlewares::RequireJWT)),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_rubric).wrap(middlewares::OptionalJWT)),
            ),
    );
}
