use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::time::Instant;

use super::PaymentService;
use crate::models::{
    ApiResponse,
    payments::requests::{PaymentListQuery, PaymentQueryParams},
};
use crate::services::{parent_family_scope, storage_error_response};

pub async fn list_payments(
    service: &PaymentService,
    query: PaymentQueryParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let started = Instant::now();
    let storage = service.get_storage(request);

    // 家长门户强制限定本家庭
    let family_id = parent_family_scope(request).or(query.family_id);

    let list_query = PaymentListQuery {
        page: Some(query.pagination.page),
        size: Some(query.pagination.size),
        family_id,
    };

    match storage.list_payments_with_pagination(list_query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(
            ApiResponse::success(response, "Payment list retrieved successfully")
                .with_duration(started),
        )),
        Err(e) => Ok(storage_error_response(&e, "Failed to retrieve payment list")),
    }
}
