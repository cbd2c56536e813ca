use serde::Serialize;
use ts_rs::TS;

// 模块信息
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/module.ts")]
pub struct ModuleInfo {
    pub name: String,
    pub display_name: String,
    pub description: String,
    pub depends_on: Vec<String>,
    pub enabled: bool,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/module.ts")]
pub struct ModuleListResponse {
    pub items: Vec<ModuleInfo>,
}

// 模块详情：反向依赖与可停用判定
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/module.ts")]
pub struct ModuleDetailResponse {
    pub module: ModuleInfo,
    pub dependents: Vec<String>,
    pub can_disable: bool,
}
