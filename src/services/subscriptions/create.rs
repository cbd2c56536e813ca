use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::time::Instant;

use super::SubscriptionService;
use crate::models::{
    ApiResponse, ErrorCode,
    subscriptions::{requests::CreateSubscriptionRequest, responses::SubscriptionResponse},
};
use crate::services::storage_error_response;
use crate::utils::validate::validate_discount_percent;

pub async fn create_subscription(
    service: &SubscriptionService,
    subscription_data: CreateSubscriptionRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let started = Instant::now();

    if let Err(msg) = validate_discount_percent(subscription_data.discount_percent) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::ValidationError, msg)));
    }

    let storage = service.get_storage(request);

    match storage.create_subscription(subscription_data).await {
        Ok(subscription) => Ok(HttpResponse::Created().json(
            ApiResponse::success(SubscriptionResponse { subscription }, "订阅创建成功")
                .with_duration(started),
        )),
        Err(e) => Ok(storage_error_response(&e, "Subscription creation failed")),
    }
}
