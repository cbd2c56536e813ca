use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SubscriptionService;
use crate::models::{
    ApiResponse, ErrorCode,
    subscriptions::responses::SubscriptionResponse,
};
use crate::services::storage_error_response;

pub async fn end_subscription(
    service: &SubscriptionService,
    subscription_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 幂等：已结束的订阅返回原记录
    match storage.end_subscription(subscription_id).await {
        Ok(Some(subscription)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            SubscriptionResponse { subscription },
            "订阅已结束",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::RecordNotFound,
            format!("Subscription {subscription_id} not found"),
        ))),
        Err(e) => Ok(storage_error_response(&e, "Failed to end subscription")),
    }
}
