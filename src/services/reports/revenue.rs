use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::time::Instant;

use super::ReportService;
use crate::models::{
    ApiResponse,
    reports::{requests::RevenueQueryParams, responses::RevenueReportResponse},
};
use crate::services::storage_error_response;
use crate::services::system::DynamicConfig;

pub async fn revenue_report(
    service: &ReportService,
    query: RevenueQueryParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let started = Instant::now();
    let storage = service.get_storage(request);

    let months = query.months.unwrap_or(12).clamp(1, 36);

    match storage.revenue_by_month(months).await {
        Ok(items) => Ok(HttpResponse::Ok().json(
            ApiResponse::success(
                RevenueReportResponse {
                    items,
                    currency: DynamicConfig::billing_currency().await,
                },
                "Revenue report retrieved successfully",
            )
            .with_duration(started),
        )),
        Err(e) => Ok(storage_error_response(&e, "Failed to compute revenue report")),
    }
}
