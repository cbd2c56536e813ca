use serde::Serialize;
use ts_rs::TS;

// 仪表盘汇总
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/report.ts")]
pub struct DashboardSummaryResponse {
    pub active_students: i64,
    pub active_families: i64,
    /// 待缴分摊净额合计
    pub outstanding_cents: i64,
    /// 本月已收款合计
    pub revenue_this_month_cents: i64,
    pub currency: String,
}

// 单月营收
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/report.ts")]
pub struct RevenuePoint {
    /// 账期，格式 YYYY-MM
    pub period: String,
    pub amount_cents: i64,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/report.ts")]
pub struct RevenueReportResponse {
    pub items: Vec<RevenuePoint>,
    pub currency: String,
}

// 家庭欠费汇总
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/report.ts")]
pub struct OutstandingFamily {
    pub family_id: i64,
    pub family_name: String,
    pub outstanding_cents: i64,
    pub allocation_count: i64,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/report.ts")]
pub struct OutstandingReportResponse {
    pub items: Vec<OutstandingFamily>,
    pub currency: String,
}
