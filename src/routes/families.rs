use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::families::requests::{
    CreateFamilyRequest, FamilyQueryParams, UpdateFamilyRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::FamilyService;
use crate::utils::SafeIDI64;

// 懒加载的全局 FamilyService 实例
static FAMILY_SERVICE: Lazy<FamilyService> = Lazy::new(FamilyService::new_lazy);

// HTTP处理程序
pub async fn list_families(
    req: HttpRequest,
    query: web::Query<FamilyQueryParams>,
) -> ActixResult<HttpResponse> {
    FAMILY_SERVICE.list_families(query.into_inner(), &req).await
}

pub async fn create_family(
    req: HttpRequest,
    family_data: web::Json<CreateFamilyRequest>,
) -> ActixResult<HttpResponse> {
    FAMILY_SERVICE
        .create_family(family_data.into_inner(), &req)
        .await
}

pub async fn get_family(req: HttpRequest, family_id: SafeIDI64) -> ActixResult<HttpResponse> {
    FAMILY_SERVICE.get_family(family_id.0, &req).await
}

pub async fn update_family(
    req: HttpRequest,
    family_id: SafeIDI64,
    update_data: web::Json<UpdateFamilyRequest>,
) -> ActixResult<HttpResponse> {
    FAMILY_SERVICE
        .update_family(family_id.0, update_data.into_inner(), &req)
        .await
}

pub async fn delete_family(req: HttpRequest, family_id: SafeIDI64) -> ActixResult<HttpResponse> {
    FAMILY_SERVICE.delete_family(family_id.0, &req).await
}

// 配置路由
pub fn configure_families_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/families")
            .wrap(middlewares::RequireModule::new("families"))
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(
                        // 家长查询本家庭，教务人员查询全部
                        web::get()
                            .to(list_families)
                            .wrap(middlewares::RequireRole::new_any(UserRole::family_roles())),
                    )
                    .route(
                        web::post()
                            .to(create_family)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    ),
            )
            .service(
                web::resource("/{id}")
                    .route(
                        web::get()
                            .to(get_family)
                            .wrap(middlewares::RequireRole::new_any(UserRole::family_roles())),
                    )
                    .route(
                        web::put()
                            .to(update_family)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    )
                    .route(
                        web::delete()
                            .to(delete_family)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    ),
            ),
    );
}
