use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ModuleService;
use crate::models::{
    ApiResponse, ErrorCode,
    modules::responses::ModuleDetailResponse,
};
use crate::modules::module_registry;

pub async fn get_module(
    _service: &ModuleService,
    name: String,
    _request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let registry = module_registry();

    match registry.get(&name) {
        Some(module) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            ModuleDetailResponse {
                dependents: registry.dependents(&name),
                can_disable: registry.can_disable(&name),
                module,
            },
            "Module retrieved successfully",
        ))),
        None => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::RecordNotFound,
            format!("Module '{name}' not found"),
        ))),
    }
}
