use serde::Deserialize;
use ts_rs::TS;

// 模块启停请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/module.ts")]
pub struct UpdateModuleRequest {
    pub enabled: bool,
}
