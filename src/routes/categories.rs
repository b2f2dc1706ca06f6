use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::categories::requests::{CreateCategoryRequest, UpdateCategoryRequest};
use crate::services::CategoryService;

// 懒加载的全局 CATEGORY_SERVICE 实例
static CATEGORY_SERVICE: Lazy<CategoryService> = Lazy::new(CategoryService::new_lazy);

pub async fn list_categories(req: HttpRequest) -> ActixResult<HttpResponse> {
    CATEGORY_SERVICE.list_categories(&req).await
}

pub async fn get_category(
    req: HttpRequest,
    category_id: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    CATEGORY_SERVICE
        .get_category(&req, category_id.into_inner())
        .await
}

pub async fn create_category(
    req: HttpRequest,
    category_data: web::Json<CreateCategoryRequest>,
) -> ActixResult<HttpResponse> {
    CATEGORY_SERVICE
        .create_category(&req, category_data.into_inner())
        .await
}

pub async fn update_category(
    req: HttpRequest,
    category_id: web::Path<i64>,
    update_data: web::Json<UpdateCategoryRequest>,
) -> ActixResult<HttpResponse> {
    CATEGORY_SERVICE
        .update_category(&req, category_id.into_inner(), update_data.into_inner())
        .await
}

pub async fn delete_category(
    req: HttpRequest,
    category_id: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    CATEGORY_SERVICE
        .delete_category(&req, category_id.into_inner())
        .await
}

// 配置路由
pub fn configure_categories_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/categorias")
            // 分类列表与详情公开
            .route("", web::get().to(list_categories))
            .service(
                web::resource("/nueva-categoria")
                    .route(web::post().to(create_category).wrap(middlewares::RequireJWT)),
            )
            .service(
                web::resource("/actualizar/{id}")
                    .route(web::put().to(update_category).wrap(middlewares::RequireJWT)),
            )
            .service(
                web::resource("/eliminar/{id}")
                    .route(web::delete().to(delete_category).wrap(middlewares::RequireJWT)),
            )
            .route("/{id}", web::get().to(get_category)),
    );
}
