use crate::models::common::PaginationQuery;
use serde::Deserialize;
use ts_rs::TS;

// 家庭查询参数（来自HTTP请求）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/family.ts")]
pub struct FamilyQueryParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub search: Option<String>,
    /// 默认只返回未停用的家庭
    pub include_inactive: Option<bool>,
}

// 创建家庭请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/family.ts")]
pub struct CreateFamilyRequest {
    pub family_name: String,
    pub contact_name: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub address: Option<String>,
}

// 更新家庭请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/family.ts")]
pub struct UpdateFamilyRequest {
    pub family_name: Option<String>,
    pub contact_name: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub address: Option<String>,
}

// 家庭列表查询参数（用于存储层）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/family.ts")]
pub struct FamilyListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub search: Option<String>,
    pub include_inactive: Option<bool>,
    /// 限定为单个家庭（家长门户）
    pub family_id: Option<i64>,
}
