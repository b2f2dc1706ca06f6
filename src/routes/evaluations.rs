use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::evaluations::requests::{CreateEvaluationRequest, UpdateEvaluationRequest};
use crate::services::EvaluationService;

// 懒加载的全局 EVALUATION_SERVICE 实例
static EVALUATION_SERVICE: Lazy<EvaluationService> = Lazy::new(EvaluationService::new_lazy);

pub async fn list_evaluations(req: HttpRequest) -> ActixResult<HttpResponse> {
    EVALUATION_SERVICE.list_evaluations(&req).await
}

pub async fn get_evaluation(
    req: HttpRequest,
    evaluation_id: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    EVALUATION_SERVICE
        .get_evaluation(&req, evaluation_id.into_inner())
        .await
}

pub async fn get_complete_evaluation(
    req: HttpRequest,
    evaluation_id: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    EVALUATION_SERVICE
        .get_complete_evaluation(&req, evaluation_id.into_inner())
        .await
}

pub async fn create_evaluation(
    req: HttpRequest,
    evaluation_data: web::Json<CreateEvaluationRequest>,
) -> ActixResult<HttpResponse> {
    EVALUATION_SERVICE
        .create_evaluation(&req, evaluation_data.into_inner())
        .await
}

pub async fn update_evaluation(
    req: HttpRequest,
    evaluation_id: web::Path<i64>,
    update_data: web::Json<UpdateEvaluationRequest>,
) -> ActixResult<HttpResponse> {
    EVALUATION_SERVICE
        .update_evaluation(&req, evaluation_id.into_inner(), update_data.into_inner())
        .await
}

pub async fn delete_evaluation(
    req: HttpRequest,
    evaluation_id: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    EVALUATION_SERVICE
        .delete_evaluation(&req, evaluation_id.into_inner())
        .await
}

// 配置路由
pub fn configure_evaluations_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/evaluaciones")
            .wrap(middlewares::RequireJWT)
            .route("/completa/{id}", web::get().to(get_complete_evaluation))
            .route("/nueva-evaluacion", web::post().to(create_evaluation))
            .route("", web::get().to(list_evaluations))
            .route("/actualizar/{id}", web::put().to(update_evaluation))
            .route("/eliminar/{id}", web::delete().to(delete_evaluation))
            .route("/{id}", web::get().to(get_evaluation)),
    );
}
