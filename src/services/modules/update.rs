use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::warn;

use super::ModuleService;
use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse, ErrorCode,
    modules::{requests::UpdateModuleRequest, responses::ModuleDetailResponse},
};
use crate::modules::module_registry;
use crate::services::storage_error_response;

pub async fn update_module(
    _service: &ModuleService,
    name: String,
    update_data: UpdateModuleRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let registry = module_registry();

    // 运行期启停只改内存状态，重启后回到配置中的功能开关
    let result = if update_data.enabled {
        registry.enable(&name)
    } else {
        registry.disable(&name)
    };

    if let Err(e) = result {
        return Ok(storage_error_response(&e, "Module update failed"));
    }

    warn!(
        "Module '{}' {} by user {:?}",
        name,
        if update_data.enabled {
            "enabled"
        } else {
            "disabled"
        },
        RequireJWT::extract_user_id(request)
    );

    match registry.get(&name) {
        Some(module) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            ModuleDetailResponse {
                dependents: registry.dependents(&name),
                can_disable: registry.can_disable(&name),
                module,
            },
            if update_data.enabled {
                "模块已启用"
            } else {
                "模块已停用"
            },
        ))),
        None => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::RecordNotFound,
            format!("Module '{name}' not found"),
        ))),
    }
}
