use serde::Deserialize;
use ts_rs::TS;

// 订阅创建请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/subscription.ts")]
pub struct CreateSubscriptionRequest {
    pub student_id: i64,
    pub fee_service_id: i64,
    #[serde(default)]
    pub discount_percent: i32,
}

// 订阅列表查询参数
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/subscription.ts")]
pub struct SubscriptionListQuery {
    pub student_id: Option<i64>,
    /// 默认只返回未结束的订阅
    pub include_ended: Option<bool>,
}
