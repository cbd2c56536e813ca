use super::entities::FeeService;
use crate::models::common::PaginationInfo;
use serde::Serialize;
use ts_rs::TS;

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/fee_service.ts")]
pub struct FeeServiceResponse {
    pub service: FeeService,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/fee_service.ts")]
pub struct FeeServiceListResponse {
    pub items: Vec<FeeService>,
    pub pagination: PaginationInfo,
}
