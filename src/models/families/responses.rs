use super::entities::Family;
use crate::models::common::PaginationInfo;
use crate::models::students::entities::Student;
use serde::Serialize;
use ts_rs::TS;

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/family.ts")]
pub struct FamilyResponse {
    pub family: Family,
}

// 家庭详情，附带家庭内学生
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/family.ts")]
pub struct FamilyDetailResponse {
    pub family: Family,
    pub students: Vec<Student>,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/family.ts")]
pub struct FamilyListResponse {
    pub items: Vec<Family>,
    pub pagination: PaginationInfo,
}
