use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::time::Instant;

use super::ReportService;
use crate::models::{ApiResponse, reports::responses::OutstandingReportResponse};
use crate::services::storage_error_response;
use crate::services::system::DynamicConfig;

pub async fn outstanding_report(
    service: &ReportService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let started = Instant::now();
    let storage = service.get_storage(request);

    match storage.outstanding_by_family().await {
        Ok(items) => Ok(HttpResponse::Ok().json(
            ApiResponse::success(
                OutstandingReportResponse {
                    items,
                    currency: DynamicConfig::billing_currency().await,
                },
                "Outstanding report retrieved successfully",
            )
            .with_duration(started),
        )),
        Err(e) => Ok(storage_error_response(
            &e,
            "Failed to compute outstanding report",
        )),
    }
}
