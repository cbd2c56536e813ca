use crate::models::common::PaginationQuery;
use serde::Deserialize;
use ts_rs::TS;

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/fee_service.ts")]
pub struct FeeServiceQueryParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub search: Option<String>,
    pub include_inactive: Option<bool>,
}

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/fee_service.ts")]
pub struct CreateFeeServiceRequest {
    pub service_name: String,
    pub description: Option<String>,
    pub monthly_price_cents: i64,
}

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/fee_service.ts")]
pub struct UpdateFeeServiceRequest {
    pub service_name: Option<String>,
    pub description: Option<String>,
    pub monthly_price_cents: Option<i64>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/fee_service.ts")]
pub struct FeeServiceListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub search: Option<String>,
    pub include_inactive: Option<bool>,
}
