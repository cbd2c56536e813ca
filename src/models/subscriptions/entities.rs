use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 订阅：学生与收费项目的关联，带折扣百分比
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/subscription.ts")]
pub struct Subscription {
    pub id: i64,
    pub student_id: i64,
    pub fee_service_id: i64,
    /// 折扣百分比，0..=100
    pub discount_percent: i32,
    pub started_at: chrono::DateTime<chrono::Utc>,
    /// 为空表示订阅仍然有效
    pub ended_at: Option<chrono::DateTime<chrono::Utc>>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl Subscription {
    pub fn is_active(&self) -> bool {
        self.ended_at.is_none()
    }
}
