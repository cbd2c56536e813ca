use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::time::Instant;

use super::FeeServiceService;
use crate::models::{
    ApiResponse, ErrorCode,
    fee_services::{requests::CreateFeeServiceRequest, responses::FeeServiceResponse},
};
use crate::services::storage_error_response;
use crate::utils::validate::{validate_amount_cents, validate_name};

pub async fn create_fee_service(
    service: &FeeServiceService,
    service_data: CreateFeeServiceRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let started = Instant::now();

    if let Err(msg) = validate_name(&service_data.service_name) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::ValidationError, msg)));
    }

    if let Err(msg) = validate_amount_cents(service_data.monthly_price_cents) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::ValidationError, msg)));
    }

    let storage = service.get_storage(request);

    match storage.create_fee_service(service_data).await {
        Ok(fee_service) => Ok(HttpResponse::Created().json(
            ApiResponse::success(
                FeeServiceResponse {
                    service: fee_service,
                },
                "收费项目创建成功",
            )
            .with_duration(started),
        )),
        Err(e) => Ok(storage_error_response(&e, "Fee service creation failed")),
    }
}
