use tracing::{info, warn};

use crate::config::AppConfig;
use crate::modules::registry::{ModuleDefinition, module_registry};

/// 内置业务模块目录，注册顺序满足依赖先行
fn builtin_modules() -> Vec<ModuleDefinition> {
    vec![
        ModuleDefinition {
            name: "families",
            display_name: "家庭管理",
            description: "家庭档案与联系人管理",
            depends_on: &[],
        },
        ModuleDefinition {
            name: "students",
            display_name: "学生管理",
            description: "学生档案管理，学生必须归属于家庭",
            depends_on: &["families"],
        },
        ModuleDefinition {
            name: "courses",
            display_name: "课程管理",
            description: "课程与选课管理",
            depends_on: &["students"],
        },
        ModuleDefinition {
            name: "billing",
            display_name: "计费",
            description: "收费项目、订阅与按月出账",
            depends_on: &["students"],
        },
        ModuleDefinition {
            name: "payments",
            display_name: "缴费",
            description: "缴费录入与分摊结清",
            depends_on: &["billing"],
        },
        ModuleDefinition {
            name: "reports",
            display_name: "报表",
            description: "仪表盘汇总、营收与欠费报表",
            depends_on: &["payments"],
        },
    ]
}

/// 按配置中的功能开关注册全部内置模块，应用启动时调用一次
pub fn register_builtin_modules(config: &AppConfig) {
    let registry = module_registry();

    for definition in builtin_modules() {
        let name = definition.name;
        let flag_enabled = config.feature_enabled(name);

        match registry.register(definition, flag_enabled) {
            Ok(()) => {
                if registry.is_enabled(name) {
                    info!("Module '{}' registered (enabled)", name);
                } else {
                    warn!("Module '{}' registered (disabled)", name);
                }
            }
            Err(e) => {
                // 目录内依赖顺序固定，注册失败只可能是重复调用
                warn!("Failed to register module '{}': {}", name, e);
            }
        }
    }
}
