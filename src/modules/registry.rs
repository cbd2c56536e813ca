use dashmap::DashMap;
use once_cell::sync::Lazy;
use std::sync::RwLock;
use tracing::{debug, warn};

use crate::errors::{IMSystemError, Result};
use crate::models::modules::responses::ModuleInfo;

/// 模块声明
#[derive(Debug, Clone)]
pub struct ModuleDefinition {
    pub name: &'static str,
    pub display_name: &'static str,
    pub description: &'static str,
    pub depends_on: &'static [&'static str],
}

struct ModuleEntry {
    definition: ModuleDefinition,
    enabled: bool,
}

/// 模块注册表：模块表 + 反向依赖邻接表
pub struct ModuleRegistry {
    modules: DashMap<String, ModuleEntry>,
    dependents: DashMap<String, Vec<String>>,
    // 注册顺序，列表输出保持稳定
    order: RwLock<Vec<String>>,
}

static MODULE_REGISTRY: Lazy<ModuleRegistry> = Lazy::new(ModuleRegistry::new);

/// 获取全局模块注册表
pub fn module_registry() -> &'static ModuleRegistry {
    &MODULE_REGISTRY
}

impl ModuleRegistry {
    pub fn new() -> Self {
        Self {
            modules: DashMap::new(),
            dependents: DashMap::new(),
            order: RwLock::new(Vec::new()),
        }
    }

    /// 注册模块。依赖必须先注册；启用状态在注册时一次性计算：
    /// 功能开关为开，且所有依赖均已启用。
    pub fn register(&self, definition: ModuleDefinition, flag_enabled: bool) -> Result<()> {
        let name = definition.name.to_string();

        if self.modules.contains_key(&name) {
            return Err(IMSystemError::validation(format!(
                "模块 '{name}' 重复注册"
            )));
        }

        let mut enabled = flag_enabled;
        for dep in definition.depends_on {
            let dep_entry = self.modules.get(*dep).ok_or_else(|| {
                IMSystemError::dependency_conflict(format!(
                    "模块 '{name}' 依赖的 '{dep}' 尚未注册"
                ))
            })?;
            if enabled && !dep_entry.enabled {
                warn!(
                    "Module '{}' disabled at registration: dependency '{}' is disabled",
                    name, dep
                );
                enabled = false;
            }
        }

        if !flag_enabled {
            debug!("Module '{}' disabled by feature flag", name);
        }

        for dep in definition.depends_on {
            self.dependents
                .entry((*dep).to_string())
                .or_default()
                .push(name.clone());
        }

        self.modules.insert(
            name.clone(),
            ModuleEntry {
                definition,
                enabled,
            },
        );
        self.order
            .write()
            .expect("Module registry order lock poisoned")
            .push(name);

        Ok(())
    }

    pub fn is_enabled(&self, name: &str) -> bool {
        self.modules
            .get(name)
            .map(|entry| entry.enabled)
            .unwrap_or(false)
    }

    pub fn get(&self, name: &str) -> Option<ModuleInfo> {
        self.modules.get(name).map(|entry| entry.info())
    }

    /// 按注册顺序列出全部模块
    pub fn list(&self) -> Vec<ModuleInfo> {
        let order = self
            .order
            .read()
            .expect("Module registry order lock poisoned");
        order
            .iter()
            .filter_map(|name| self.modules.get(name).map(|entry| entry.info()))
            .collect()
    }

    /// 反向依赖：声明依赖 `name` 的模块
    pub fn dependents(&self, name: &str) -> Vec<String> {
        self.dependents
            .get(name)
            .map(|deps| deps.clone())
            .unwrap_or_default()
    }

    fn enabled_dependents(&self, name: &str) -> Vec<String> {
        self.dependents(name)
            .into_iter()
            .filter(|dep| self.is_enabled(dep))
            .collect()
    }

    /// 只要还有启用中的模块依赖它，就不可停用
    pub fn can_disable(&self, name: &str) -> bool {
        self.modules.contains_key(name) && self.enabled_dependents(name).is_empty()
    }

    /// 启用模块，要求其依赖全部处于启用状态
    pub fn enable(&self, name: &str) -> Result<()> {
        let depends_on = {
            let entry = self
                .modules
                .get(name)
                .ok_or_else(|| IMSystemError::not_found(format!("模块 '{name}' 不存在")))?;
            entry.definition.depends_on
        };

        for dep in depends_on {
            if !self.is_enabled(dep) {
                return Err(IMSystemError::dependency_conflict(format!(
                    "无法启用 '{name}'：依赖的模块 '{dep}' 未启用"
                )));
            }
        }

        if let Some(mut entry) = self.modules.get_mut(name) {
            entry.enabled = true;
        }
        Ok(())
    }

    /// 停用模块，被启用中的模块依赖时拒绝
    pub fn disable(&self, name: &str) -> Result<()> {
        if !self.modules.contains_key(name) {
            return Err(IMSystemError::not_found(format!("模块 '{name}' 不存在")));
        }

        let blockers = self.enabled_dependents(name);
        if !blockers.is_empty() {
            return Err(IMSystemError::dependency_conflict(format!(
                "无法停用 '{name}'：仍被启用中的模块依赖: {}",
                blockers.join(", ")
            )));
        }

        if let Some(mut entry) = self.modules.get_mut(name) {
            entry.enabled = false;
        }
        Ok(())
    }
}

impl Default for ModuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ModuleEntry {
    fn info(&self) -> ModuleInfo {
        ModuleInfo {
            name: self.definition.name.to_string(),
            display_name: self.definition.display_name.to_string(),
            description: self.definition.description.to_string(),
            depends_on: self
                .definition
                .depends_on
                .iter()
                .map(|dep| (*dep).to_string())
                .collect(),
            enabled: self.enabled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn def(
        name: &'static str,
        depends_on: &'static [&'static str],
    ) -> ModuleDefinition {
        ModuleDefinition {
            name,
            display_name: name,
            description: "",
            depends_on,
        }
    }

    #[test]
    fn test_register_and_list_order() {
        let registry = ModuleRegistry::new();
        registry.register(def("families", &[]), true).unwrap();
        registry.register(def("students", &["families"]), true).unwrap();

        let names: Vec<String> = registry.list().into_iter().map(|m| m.name).collect();
        assert_eq!(names, vec!["families", "students"]);
    }

    #[test]
    fn test_duplicate_registration_rejected() {
        let registry = ModuleRegistry::new();
        registry.register(def("families", &[]), true).unwrap();
        assert!(registry.register(def("families", &[]), true).is_err());
    }

    #[test]
    fn test_unknown_dependency_rejected() {
        let registry = ModuleRegistry::new();
        assert!(
            registry
                .register(def("students", &["families"]), true)
                .is_err()
        );
    }

    #[test]
    fn test_feature_flag_gates_initial_status() {
        let registry = ModuleRegistry::new();
        registry.register(def("families", &[]), false).unwrap();
        assert!(!registry.is_enabled("families"));
    }

    #[test]
    fn test_disabled_dependency_disables_module() {
        let registry = ModuleRegistry::new();
        registry.register(def("families", &[]), false).unwrap();
        // 自身开关为开，但依赖停用，注册后仍为停用
        registry.register(def("students", &["families"]), true).unwrap();
        assert!(!registry.is_enabled("students"));
    }

    #[test]
    fn test_can_disable_blocked_by_enabled_dependent() {
        let registry = ModuleRegistry::new();
        registry.register(def("families", &[]), true).unwrap();
        registry.register(def("students", &["families"]), true).unwrap();

        assert!(!registry.can_disable("families"));
        assert!(registry.disable("families").is_err());

        registry.disable("students").unwrap();
        assert!(registry.can_disable("families"));
        assert!(registry.disable("families").is_ok());
    }

    #[test]
    fn test_enable_requires_enabled_dependencies() {
        let registry = ModuleRegistry::new();
        registry.register(def("families", &[]), false).unwrap();
        registry.register(def("students", &["families"]), true).unwrap();

        assert!(registry.enable("students").is_err());
        registry.enable("families").unwrap();
        assert!(registry.enable("students").is_ok());
        assert!(registry.is_enabled("students"));
    }

    #[test]
    fn test_dependents_reverse_edges() {
        let registry = ModuleRegistry::new();
        registry.register(def("families", &[]), true).unwrap();
        registry.register(def("students", &["families"]), true).unwrap();
        registry.register(def("billing", &["students"]), true).unwrap();

        assert_eq!(registry.dependents("families"), vec!["students"]);
        assert_eq!(registry.dependents("students"), vec!["billing"]);
        assert!(registry.dependents("billing").is_empty());
    }

    #[test]
    fn test_unknown_module_operations() {
        let registry = ModuleRegistry::new();
        assert!(!registry.is_enabled("ghost"));
        assert!(!registry.can_disable("ghost"));
        assert!(registry.enable("ghost").is_err());
        assert!(registry.disable("ghost").is_err());
    }
}
