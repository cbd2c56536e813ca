use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ModuleService;
use crate::models::{ApiResponse, modules::responses::ModuleListResponse};
use crate::modules::module_registry;

pub async fn list_modules(
    _service: &ModuleService,
    _request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let items = module_registry().list();

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        ModuleListResponse { items },
        "Module list retrieved successfully",
    )))
}
