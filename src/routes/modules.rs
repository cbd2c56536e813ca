use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::modules::requests::UpdateModuleRequest;
use crate::models::users::entities::UserRole;
use crate::services::ModuleService;
use crate::utils::SafeModuleName;

// 懒加载的全局 ModuleService 实例
static MODULE_SERVICE: Lazy<ModuleService> = Lazy::new(ModuleService::new_lazy);

// HTTP处理程序
pub async fn list_modules(req: HttpRequest) -> ActixResult<HttpResponse> {
    MODULE_SERVICE.list_modules(&req).await
}

pub async fn get_module(req: HttpRequest, name: SafeModuleName) -> ActixResult<HttpResponse> {
    MODULE_SERVICE.get_module(name.0, &req).await
}

pub async fn update_module(
    req: HttpRequest,
    name: SafeModuleName,
    update_data: web::Json<UpdateModuleRequest>,
) -> ActixResult<HttpResponse> {
    MODULE_SERVICE
        .update_module(name.0, update_data.into_inner(), &req)
        .await
}

// 配置路由
pub fn configure_modules_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/modules")
            .wrap(middlewares::RequireJWT)
            .service(
                web::scope("")
                    // 模块注册表仅管理员可见可控
                    .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles()))
                    .route("", web::get().to(list_modules))
                    .route("/{name}", web::get().to(get_module))
                    .route("/{name}", web::put().to(update_module)),
            ),
    );
}
