use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::time::Instant;

use super::BillingService;
use crate::models::{
    ApiResponse, ErrorCode,
    billing::{requests::BillingRunRequest, responses::BillingRunResponse},
};
use crate::services::storage_error_response;
use crate::utils::validate::validate_period;

pub async fn run_billing(
    service: &BillingService,
    run_request: BillingRunRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let started = Instant::now();

    if let Err(msg) = validate_period(&run_request.period) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::ValidationError, msg)));
    }

    let storage = service.get_storage(request);

    // 重复出账安全：已有分摊的订阅被跳过
    match storage.run_billing_for_period(&run_request.period).await {
        Ok((created, skipped)) => Ok(HttpResponse::Ok().json(
            ApiResponse::success(
                BillingRunResponse {
                    period: run_request.period,
                    created,
                    skipped,
                },
                "出账完成",
            )
            .with_duration(started),
        )),
        Err(e) => Ok(storage_error_response(&e, "Billing run failed")),
    }
}
