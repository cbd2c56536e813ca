use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::billing::requests::{AllocationQueryParams, BillingRunRequest};
use crate::models::users::entities::UserRole;
use crate::services::BillingService;

// 懒加载的全局 BillingService 实例
static BILLING_SERVICE: Lazy<BillingService> = Lazy::new(BillingService::new_lazy);

// HTTP处理程序
pub async fn run_billing(
    req: HttpRequest,
    run_data: web::Json<BillingRunRequest>,
) -> ActixResult<HttpResponse> {
    BILLING_SERVICE.run_billing(run_data.into_inner(), &req).await
}

pub async fn list_allocations(
    req: HttpRequest,
    query: web::Query<AllocationQueryParams>,
) -> ActixResult<HttpResponse> {
    BILLING_SERVICE
        .list_allocations(query.into_inner(), &req)
        .await
}

// 配置路由
pub fn configure_billing_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/billing")
            .wrap(middlewares::RequireModule::new("billing"))
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("/runs").route(
                    web::post()
                        .to(run_billing)
                        .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                ),
            )
            .service(
                web::resource("/allocations").route(
                    // 家长查询本家庭分摊，教务人员查询全部
                    web::get()
                        .to(list_allocations)
                        .wrap(middlewares::RequireRole::new_any(UserRole::family_roles())),
                ),
            ),
    );
}
