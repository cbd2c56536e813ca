use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 家庭实体：学生的缴费与联系单位
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/family.ts")]
pub struct Family {
    pub id: i64,
    pub family_name: String,
    pub contact_name: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub address: Option<String>,
    /// 软删除标记，false 表示已停用
    pub is_active: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
