/*!
 * 可选 JWT 认证中间件
 *
 * 用于公开读取但对登录用户展示更多内容的路由。未携带令牌的请求以匿名身份放行，
 * 携带了令牌但校验失败的请求仍然被拒绝，响应与 [`RequireJWT`](super::RequireJWT) 一致。
 */

use actix_service::{Service, Transform};
use actix_web::{
    Error, HttpMessage,
    body::EitherBody,
    dev::{ServiceRequest, ServiceResponse},
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use std::rc::Rc;
use tracing::{debug, info};

use super::identify;

#[derive(Clone)]
pub struct OptionalJWT;

impl<S, B> Transform<S, ServiceRequest> for OptionalJWT
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = OptionalJWTMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(OptionalJWTMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct OptionalJWTMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for OptionalJWTMiddleware<S>
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
            let identified = identify(&req).await;
            match identified {
                Ok(caller) => {
                    if let Some(caller) = caller {
                        debug!("Optional JWT identified user ID: {}", caller.id);
                        req.extensions_mut().insert(caller);
                    }
                    Ok(srv.call(req).await?.map_into_left_body())
                }
                Err(failure) => {
                    info!(
                        "Optional JWT rejected request to {}: {:?}",
                        req.path(),
                        failure
                    );
                    Ok(req.into_response(failure.into_response().map_into_right_body()))
                }
            }
        })
    }
}
