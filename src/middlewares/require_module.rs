/*!
 * 模块开关中间件
 *
 * 挂在某个业务模块的路由作用域上，模块在注册表中处于停用状态时，
 * 该作用域下的所有请求直接返回 403 MODULE_DISABLED。
 */

use actix_service::{Service, Transform};
use actix_web::{
    Error,
    body::EitherBody,
    dev::{ServiceRequest, ServiceResponse},
    http::StatusCode,
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use std::rc::Rc;
use tracing::debug;

use crate::models::ErrorCode;
use crate::modules::module_registry;

use super::create_error_response;

#[derive(Clone)]
pub struct RequireModule {
    module_name: &'static str,
}

impl RequireModule {
    pub fn new(module_name: &'static str) -> Self {
        Self { module_name }
    }
}

impl<S, B> Transform<S, ServiceRequest> for RequireModule
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RequireModuleMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireModuleMiddleware {
            service: Rc::new(service),
            module_name: self.module_name,
        }))
    }
}

pub struct RequireModuleMiddleware<S> {
    service: Rc<S>,
    module_name: &'static str,
}

impl<S, B> Service<ServiceRequest> for RequireModuleMiddleware<S>
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
        let module_name = self.module_name;

        Box::pin(async move {
            if !module_registry().is_enabled(module_name) {
                debug!(
                    "Request to {} rejected: module '{}' is disabled",
                    req.path(),
                    module_name
                );
                return Ok(req.into_response(
                    create_error_response(
                        StatusCode::FORBIDDEN,
                        ErrorCode::ModuleDisabled,
                        &format!("Module '{module_name}' is disabled"),
                    )
                    .map_into_right_body(),
                ));
            }

            let res = srv.call(req).await?.map_into_left_body();
            Ok(res)
        })
    }
}
