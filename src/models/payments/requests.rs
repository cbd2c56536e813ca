use super::entities::PaymentMethod;
use crate::models::common::PaginationQuery;
use serde::Deserialize;
use ts_rs::TS;

// 缴费录入请求：金额必须等于所结清分摊的净额之和
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/payment.ts")]
pub struct CreatePaymentRequest {
    pub family_id: i64,
    pub amount_cents: i64,
    pub method: PaymentMethod,
    /// 本次缴费要结清的待缴分摊
    pub allocation_ids: Vec<i64>,
    pub note: Option<String>,
}

// 缴费查询参数（来自HTTP请求）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/payment.ts")]
pub struct PaymentQueryParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub family_id: Option<i64>,
}

// 缴费列表查询参数（用于存储层）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/payment.ts")]
pub struct PaymentListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub family_id: Option<i64>,
}
