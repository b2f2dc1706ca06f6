/*!
 * JWT 认证中间件
 *
 * 校验 `Authorization: Bearer <JWT_TOKEN>`，通过后把 [`Caller`] 写入请求扩展。
 *
 * ```rust,ignore
 * web::scope("/softwares")
 *     .wrap(RequireJWT)
 *     .route("", web::get().to(list_softwares))
 * ```
 *
 * 失败时的响应：
 *
 * - 未携带令牌：401
 * - 令牌无效或已过期：401，错误码区分两者
 * - 令牌对应的用户已不存在：404
 */

use actix_service::{Service, Transform};
use actix_web::{
    Error, HttpMessage, HttpRequest,
    body::EitherBody,
    dev::{ServiceRequest, ServiceResponse},
    http::{Method, StatusCode},
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use std::rc::Rc;
use tracing::{debug, info};

use super::{AuthFailure, create_error_response, identify};
use crate::models::ErrorCode;
use crate::policy::Caller;

#[derive(Clone)]
pub struct RequireJWT;

impl<S, B> Transform<S, ServiceRequest> for RequireJWT
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RequireJWTMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireJWTMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct RequireJWTMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for RequireJWTMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &self,
        ctx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = self.service.clone();
        Box::pin(async move {
            // 处理 OPTIONS 请求
            if req.method() == Method::OPTIONS {
                return Ok(req.into_response(
                    create_error_response(StatusCode::NO_CONTENT, ErrorCode::BadRequest, "")
                        .map_into_right_body(),
                ));
            }

            let identified = identify(&req).await;
            let failure = match identified {
                Ok(Some(caller)) => {
                    debug!("JWT authentication successful for ID: {}", caller.id);
                    req.extensions_mut().insert(caller);
                    return Ok(srv.call(req).await?.map_into_left_body());
                }
                Ok(None) => AuthFailure::Missing,
                Err(failure) => failure,
            };

            info!(
                "JWT authentication failed for request to {}: {:?}",
                req.path(),
                failure
            );
            Ok(req.into_response(failure.into_response().map_into_right_body()))
        })
    }
}

impl RequireJWT {
    /// 从请求扩展中提取调用者，未认证时为 `None`
    pub fn extract_caller(req: &HttpRequest) -> Option<Caller> {
        req.extensions().get::<Caller>().copied()
    }

    pub fn extract_user_id(req: &HttpRequest) -> Option<i64> {
        Self::extract_caller(req).map(|caller| caller.id)
    }
}
