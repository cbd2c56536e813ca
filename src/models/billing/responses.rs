use super::entities::FeeAllocation;
use crate::models::common::PaginationInfo;
use serde::Serialize;
use ts_rs::TS;

// 出账结果
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/billing.ts")]
pub struct BillingRunResponse {
    pub period: String,
    /// 本次新生成的分摊数
    pub created: i64,
    /// 已存在而跳过的订阅数
    pub skipped: i64,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/billing.ts")]
pub struct AllocationListResponse {
    pub items: Vec<FeeAllocation>,
    pub pagination: PaginationInfo,
}
