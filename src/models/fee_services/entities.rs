use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 收费项目：可订阅的计费目录项，金额以分为单位
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/fee_service.ts")]
pub struct FeeService {
    pub id: i64,
    pub service_name: String,
    pub description: Option<String>,
    pub monthly_price_cents: i64,
    pub is_active: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
