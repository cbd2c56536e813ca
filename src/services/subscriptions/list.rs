use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SubscriptionService;
use crate::models::{
    ApiResponse,
    subscriptions::{requests::SubscriptionListQuery, responses::SubscriptionListResponse},
};
use crate::services::storage_error_response;

pub async fn list_subscriptions(
    service: &SubscriptionService,
    query: SubscriptionListQuery,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_subscriptions(query).await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            SubscriptionListResponse { items },
            "Subscription list retrieved successfully",
        ))),
        Err(e) => Ok(storage_error_response(
            &e,
            "Failed to retrieve subscription list",
        )),
    }
}
