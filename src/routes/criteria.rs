use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::criteria::requests::{CreateCriterionRequest, UpdateCriterionRequest};
use crate::services::CriterionService;

// 懒加载的全局 CRITERION_SERVICE 实例
static CRITERION_SERVICE: Lazy<CriterionService> = Lazy::new(CriterionService::new_lazy);

pub async fn list_criteria(req: HttpRequest) -> ActixResult<HttpResponse> {
    CRITERION_SERVICE.list_criteria(&req).await
}

pub async fn list_criteria_by_category(
    req: HttpRequest,
    category_id: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    CRITERION_SERVICE
        .list_criteria_by_category(&req, category_id.into_inner())
        .await
}

pub async fn get_criterion(
    req: HttpRequest,
    criterion_id: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    CRITERION_SERVICE
        .get_criterion(&req, criterion_id.into_inner())
        .await
}

pub async fn create_criterion(
    req: HttpRequest,
    criterion_data: web::Json<CreateCriterionRequest>,
) -> ActixResult<HttpResponse> {
    CRITERION_SERVICE
        .create_criterion(&req, criterion_data.into_inner())
        .await
}

pub async fn update_criterion(
    req: HttpRequest,
    criterion_id: web::Path<i64>,
    update_data: web::Json<UpdateCriterionRequest>,
) -> ActixResult<HttpResponse> {
    CRITERION_SERVICE
        .update_criterion(&req, criterion_id.into_inner(), update_data.into_inner())
        .await
}

pub async fn delete_criterion(
    req: HttpRequest,
    criterion_id: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    CRITERION_SERVICE
        .delete_criterion(&req, criterion_id.into_inner())
        .await
}

// 配置路由
pub fn configure_criteria_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/criterios")
            .wrap(middlewares::RequireJWT)
            .route(
                "/categoria/{id_categoria}",
                web::get().to(list_criteria_by_category),
            )
            .route("", web::get().to(list_criteria))
            .route("/nuevo-criterio", web::post().to(create_criterion))
            .route("/actualizar/{id}", web::put().to(update_criterion))
            .route("/eliminar/{id}", web::delete().to(delete_criterion))
            .route("/{id}", web::get().to(get_criterion)),
    );
}
