use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::scores::requests::{CreateScoreRequest, UpdateScoreRequest};
use crate::services::ScoreService;

// 懒加载的全局 SCORE_SERVICE 实例
static SCORE_SERVICE: Lazy<ScoreService> = Lazy::new(ScoreService::new_lazy);

pub async fn list_scores(req: HttpRequest) -> ActixResult<HttpResponse> {
    SCORE_SERVICE.list_scores(&req).await
}

pub async fn get_score(req: HttpRequest, score_id: web::Path<i64>) -> ActixResult<HttpResponse> {
    SCORE_SERVICE.get_score(&req, score_id.into_inner()).await
}

pub async fn create_score(
    req: HttpRequest,
    score_data: web::Json<CreateScoreRequest>,
) -> ActixResult<HttpResponse> {
    SCORE_SERVICE
        .create_score(&req, score_data.into_inner())
        .await
}

pub async fn update_score(
    req: HttpRequest,
    score_id: web::Path<i64>,
    update_data: web::Json<UpdateScoreRequest>,
) -> ActixResult<HttpResponse> {
    SCORE_SERVICE
        .update_score(&req, score_id.into_inner(), update_data.into_inner())
        .await
}

pub async fn delete_score(req: HttpRequest, score_id: web::Path<i64>) -> ActixResult<HttpResponse> {
    SCORE_SERVICE.delete_score(&req, score_id.into_inner()).await
}

// 配置路由
pub fn configure_scores_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/puntajes")
            // 创建得分不强制登录
            .service(
                web::resource("/nuevo-puntaje")
                    .route(web::post().to(create_score).wrap(middlewares::OptionalJWT)),
            )
            .service(
                web::scope("")
                    .wrap(middlewares::RequireJWT)
                    .route("", web::get().to(list_scores))
                    .route("/actualizar/{id}", web::put().to(update_score))
                    .route("/eliminar/{id}", web::delete().to(delete_score))
                    .route("/{id}", web::get().to(get_score)),
            ),
    );
}
