use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use chrono::Datelike;
use std::time::Instant;

use super::ReportService;
use crate::models::{ApiResponse, reports::responses::DashboardSummaryResponse};
use crate::services::storage_error_response;
use crate::services::system::DynamicConfig;

pub async fn dashboard_summary(
    service: &ReportService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let started = Instant::now();
    let storage = service.get_storage(request);

    let active_students = match storage.count_active_students().await {
        Ok(count) => count,
        Err(e) => return Ok(storage_error_response(&e, "Failed to count students")),
    };

    let active_families = match storage.count_active_families().await {
        Ok(count) => count,
        Err(e) => return Ok(storage_error_response(&e, "Failed to count families")),
    };

    let outstanding_cents = match storage.sum_outstanding_cents(None).await {
        Ok(sum) => sum,
        Err(e) => return Ok(storage_error_response(&e, "Failed to sum outstanding fees")),
    };

    // 本月营收取营收序列的最后一个点
    let revenue_this_month_cents = match storage.revenue_by_month(1).await {
        Ok(points) => points.last().map(|p| p.amount_cents).unwrap_or(0),
        Err(e) => return Ok(storage_error_response(&e, "Failed to compute revenue")),
    };

    let now = chrono::Utc::now();
    tracing::debug!(
        "Dashboard summary computed for {:04}-{:02}",
        now.year(),
        now.month()
    );

    let response = DashboardSummaryResponse {
        active_students,
        active_families,
        outstanding_cents,
        revenue_this_month_cents,
        currency: DynamicConfig::billing_currency().await,
    };

    Ok(HttpResponse::Ok().json(
        ApiResponse::success(response, "Dashboard summary retrieved successfully")
            .with_duration(started),
    ))
}
