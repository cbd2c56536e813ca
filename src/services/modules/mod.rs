pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::modules::requests::UpdateModuleRequest;

/// 模块管理服务：只操作内存中的模块注册表，无存储依赖
pub struct ModuleService;

impl ModuleService {
    pub fn new_lazy() -> Self {
        Self
    }

    // 列出全部模块
    pub async fn list_modules(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_modules(self, request).await
    }

    // 模块详情
    pub async fn get_module(
        &self,
        name: String,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        get::get_module(self, name, request).await
    }

    // 启停模块
    pub async fn update_module(
        &self,
        name: String,
        update_data: UpdateModuleRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_module(self, name, update_data, request).await
    }
}
