use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 学生实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct Student {
    pub id: i64,
    /// 学生必须属于一个已存在的家庭
    pub family_id: i64,
    pub first_name: String,
    pub last_name: String,
    /// 出生日期，格式 YYYY-MM-DD
    pub date_of_birth: Option<String>,
    pub enrolled_at: chrono::DateTime<chrono::Utc>,
    /// 软删除标记：删除学生只置 false，不移除记录
    pub is_active: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl Student {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
