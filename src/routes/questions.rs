use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::questions::requests::{CreateQuestionRequest, UpdateQuestionRequest};
use crate::services::QuestionService;

// 懒加载的全局 QUESTION_SERVICE 实例
static QUESTION_SERVICE: Lazy<QuestionService> = Lazy::new(QuestionService::new_lazy);

pub async fn list_questions(req: HttpRequest) -> ActixResult<HttpResponse> {
    QUESTION_SERVICE.list_questions(&req).await
}

pub async fn list_questions_by_category(
    req: HttpRequest,
    category_id: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    QUESTION_SERVICE
        .list_questions_by_category(&req, category_id.into_inner())
        .await
}

pub async fn get_question(
    req: HttpRequest,
    question_id: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    QUESTION_SERVICE
        .get_question(&req, question_id.into_inner())
        .await
}

pub async fn create_question(
    req: HttpRequest,
    question_data: web::Json<CreateQuestionRequest>,
) -> ActixResult<HttpResponse> {
    QUESTION_SERVICE
        .create_question(&req, question_data.into_inner())
        .await
}

pub async fn update_question(
    req: HttpRequest,
    question_id: web::Path<i64>,
    update_data: web::Json<UpdateQuestionRequest>,
) -> ActixResult<HttpResponse> {
    QUESTION_SERVICE
        .update_question(&req, question_id.into_inner(), update_data.into_inner())
        .await
}

pub async fn delete_question(
    req: HttpRequest,
    question_id: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    QUESTION_SERVICE
        .delete_question(&req, question_id.into_inner())
        .await
}

// 配置路由
pub fn configure_questions_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/preguntas")
            .wrap(middlewares::RequireJWT)
            .route(
                "/categoria/{id_categoria}",
                web::get().to(list_questions_by_category),
            )
            .route("", web::get().to(list_questions))
            .route("/nueva-pregunta", web::post().to(create_question))
            .route("/actualizar/{id}", web::put().to(update_question))
            .route("/eliminar/{id}", web::delete().to(delete_question))
            .route("/{id}", web::get().to(get_question)),
    );
}
