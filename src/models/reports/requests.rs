use serde::Deserialize;
use ts_rs::TS;

// 营收报表查询参数
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/report.ts")]
pub struct RevenueQueryParams {
    /// 回溯月数，默认 12，上限 36
    pub months: Option<u32>,
}
