use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::payments::requests::{CreatePaymentRequest, PaymentQueryParams};
use crate::models::users::entities::UserRole;
use crate::services::PaymentService;
use crate::utils::SafeIDI64;

// 懒加载的全局 PaymentService 实例
static PAYMENT_SERVICE: Lazy<PaymentService> = Lazy::new(PaymentService::new_lazy);

// HTTP处理程序
pub async fn list_payments(
    req: HttpRequest,
    query: web::Query<PaymentQueryParams>,
) -> ActixResult<HttpResponse> {
    PAYMENT_SERVICE.list_payments(query.into_inner(), &req).await
}

pub async fn create_payment(
    req: HttpRequest,
    payment_data: web::Json<CreatePaymentRequest>,
) -> ActixResult<HttpResponse> {
    PAYMENT_SERVICE
        .create_payment(payment_data.into_inner(), &req)
        .await
}

pub async fn get_payment(req: HttpRequest, payment_id: SafeIDI64) -> ActixResult<HttpResponse> {
    PAYMENT_SERVICE.get_payment(payment_id.0, &req).await
}

// 配置路由
pub fn configure_payments_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/payments")
            .wrap(middlewares::RequireModule::new("payments"))
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(
                        // 家长查询本家庭缴费记录，教务人员查询全部
                        web::get()
                            .to(list_payments)
                            .wrap(middlewares::RequireRole::new_any(UserRole::family_roles())),
                    )
                    .route(
                        web::post()
                            .to(create_payment)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    ),
            )
            .service(
                web::resource("/{id}").route(
                    web::get()
                        .to(get_payment)
                        .wrap(middlewares::RequireRole::new_any(UserRole::family_roles())),
                ),
            ),
    );
}
