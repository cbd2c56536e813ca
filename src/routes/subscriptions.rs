use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::subscriptions::requests::{CreateSubscriptionRequest, SubscriptionListQuery};
use crate::models::users::entities::UserRole;
use crate::services::SubscriptionService;
use crate::utils::SafeIDI64;

// 懒加载的全局 SubscriptionService 实例
static SUBSCRIPTION_SERVICE: Lazy<SubscriptionService> = Lazy::new(SubscriptionService::new_lazy);

// HTTP处理程序
pub async fn list_subscriptions(
    req: HttpRequest,
    query: web::Query<SubscriptionListQuery>,
) -> ActixResult<HttpResponse> {
    SUBSCRIPTION_SERVICE
        .list_subscriptions(query.into_inner(), &req)
        .await
}

pub async fn create_subscription(
    req: HttpRequest,
    subscription_data: web::Json<CreateSubscriptionRequest>,
) -> ActixResult<HttpResponse> {
    SUBSCRIPTION_SERVICE
        .create_subscription(subscription_data.into_inner(), &req)
        .await
}

pub async fn end_subscription(
    req: HttpRequest,
    subscription_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    SUBSCRIPTION_SERVICE
        .end_subscription(subscription_id.0, &req)
        .await
}

// 配置路由
pub fn configure_subscriptions_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/subscriptions")
            .wrap(middlewares::RequireModule::new("billing"))
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(
                        web::get()
                            .to(list_subscriptions)
                            .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles())),
                    )
                    .route(
                        web::post()
                            .to(create_subscription)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    ),
            )
            .service(
                web::resource("/{id}/end").route(
                    web::post()
                        .to(end_subscription)
                        .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                ),
            ),
    );
}
