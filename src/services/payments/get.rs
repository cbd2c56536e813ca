use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::PaymentService;
use crate::models::{
    ApiResponse, ErrorCode,
    payments::responses::PaymentDetailResponse,
};
use crate::services::{parent_family_scope, storage_error_response};

pub async fn get_payment(
    service: &PaymentService,
    payment_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let payment = match storage.get_payment_by_id(payment_id).await {
        Ok(Some(payment)) => payment,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::RecordNotFound,
                format!("Payment {payment_id} not found"),
            )));
        }
        Err(e) => return Ok(storage_error_response(&e, "Failed to retrieve payment")),
    };

    // 家长只能查看本家庭的缴费记录
    if let Some(scope) = parent_family_scope(request)
        && scope != payment.family_id
    {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::Forbidden,
            "Access denied.",
        )));
    }

    match storage.list_allocations_by_payment(payment_id).await {
        Ok(allocations) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            PaymentDetailResponse {
                payment,
                allocations,
            },
            "Payment retrieved successfully",
        ))),
        Err(e) => Ok(storage_error_response(
            &e,
            "Failed to retrieve payment allocations",
        )),
    }
}
