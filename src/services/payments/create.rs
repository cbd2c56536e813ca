use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::time::Instant;

use super::PaymentService;
use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse, ErrorCode,
    payments::{requests::CreatePaymentRequest, responses::PaymentResponse},
};
use crate::services::storage_error_response;
use crate::storage::NewPayment;
use crate::utils::random_code::generate_payment_reference;

pub async fn create_payment(
    service: &PaymentService,
    payment_data: CreatePaymentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let started = Instant::now();

    if payment_data.amount_cents <= 0 {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationError,
            "Payment amount must be positive",
        )));
    }

    if payment_data.allocation_ids.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationError,
            "Payment must settle at least one allocation",
        )));
    }

    let storage = service.get_storage(request);

    let new_payment = NewPayment {
        family_id: payment_data.family_id,
        amount_cents: payment_data.amount_cents,
        method: payment_data.method,
        reference: generate_payment_reference(),
        note: payment_data.note,
        allocation_ids: payment_data.allocation_ids,
        created_by: RequireJWT::extract_user_id(request),
    };

    // 校验与结清在存储层事务中完成，金额不符整体回滚
    match storage.create_payment_with_allocations(new_payment).await {
        Ok(payment) => Ok(HttpResponse::Created().json(
            ApiResponse::success(PaymentResponse { payment }, "缴费录入成功")
                .with_duration(started),
        )),
        Err(e) => Ok(storage_error_response(&e, "Payment creation failed")),
    }
}
