use super::entities::AllocationStatus;
use crate::models::common::PaginationQuery;
use serde::Deserialize;
use ts_rs::TS;

// 出账请求：为指定账期生成费用分摊
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/billing.ts")]
pub struct BillingRunRequest {
    /// 账期，格式 YYYY-MM
    pub period: String,
}

// 分摊查询参数（来自HTTP请求）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/billing.ts")]
pub struct AllocationQueryParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub family_id: Option<i64>,
    pub student_id: Option<i64>,
    pub status: Option<AllocationStatus>,
    pub period: Option<String>,
}

// 分摊列表查询参数（用于存储层）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/billing.ts")]
pub struct AllocationListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub family_id: Option<i64>,
    pub student_id: Option<i64>,
    pub status: Option<AllocationStatus>,
    pub period: Option<String>,
}
