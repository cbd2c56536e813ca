use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::fee_services::requests::{
    CreateFeeServiceRequest, FeeServiceQueryParams, UpdateFeeServiceRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::FeeServiceService;
use crate::utils::SafeIDI64;

// 懒加载的全局 FeeServiceService 实例
static FEE_SERVICE_SERVICE: Lazy<FeeServiceService> = Lazy::new(FeeServiceService::new_lazy);

// HTTP处理程序
pub async fn list_fee_services(
    req: HttpRequest,
    query: web::Query<FeeServiceQueryParams>,
) -> ActixResult<HttpResponse> {
    FEE_SERVICE_SERVICE
        .list_fee_services(query.into_inner(), &req)
        .await
}

pub async fn create_fee_service(
    req: HttpRequest,
    service_data: web::Json<CreateFeeServiceRequest>,
) -> ActixResult<HttpResponse> {
    FEE_SERVICE_SERVICE
        .create_fee_service(service_data.into_inner(), &req)
        .await
}

pub async fn get_fee_service(req: HttpRequest, service_id: SafeIDI64) -> ActixResult<HttpResponse> {
    FEE_SERVICE_SERVICE.get_fee_service(service_id.0, &req).await
}

pub async fn update_fee_service(
    req: HttpRequest,
    service_id: SafeIDI64,
    update_data: web::Json<UpdateFeeServiceRequest>,
) -> ActixResult<HttpResponse> {
    FEE_SERVICE_SERVICE
        .update_fee_service(service_id.0, update_data.into_inner(), &req)
        .await
}

pub async fn delete_fee_service(
    req: HttpRequest,
    service_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    FEE_SERVICE_SERVICE
        .delete_fee_service(service_id.0, &req)
        .await
}

// 配置路由
pub fn configure_fee_services_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/fee-services")
            .wrap(middlewares::RequireModule::new("billing"))
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(
                        web::get()
                            .to(list_fee_services)
                            .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles())),
                    )
                    .route(
                        web::post()
                            .to(create_fee_service)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    ),
            )
            .service(
                web::resource("/{id}")
                    .route(
                        web::get()
                            .to(get_fee_service)
                            .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles())),
                    )
                    .route(
                        web::put()
                            .to(update_fee_service)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    )
                    .route(
                        web::delete()
                            .to(delete_fee_service)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    ),
            ),
    );
}
