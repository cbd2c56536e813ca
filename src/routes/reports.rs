use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::reports::requests::RevenueQueryParams;
use crate::models::users::entities::UserRole;
use crate::services::ReportService;

// 懒加载的全局 ReportService 实例
static REPORT_SERVICE: Lazy<ReportService> = Lazy::new(ReportService::new_lazy);

// HTTP处理程序
pub async fn dashboard_summary(req: HttpRequest) -> ActixResult<HttpResponse> {
    REPORT_SERVICE.dashboard_summary(&req).await
}

pub async fn revenue_report(
    req: HttpRequest,
    query: web::Query<RevenueQueryParams>,
) -> ActixResult<HttpResponse> {
    REPORT_SERVICE.revenue_report(query.into_inner(), &req).await
}

pub async fn outstanding_report(req: HttpRequest) -> ActixResult<HttpResponse> {
    REPORT_SERVICE.outstanding_report(&req).await
}

// 配置路由
pub fn configure_reports_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/reports")
            .wrap(middlewares::RequireModule::new("reports"))
            .wrap(middlewares::RequireJWT)
            .service(
                web::scope("")
                    // 报表仅对教务人员开放
                    .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles()))
                    .route("/dashboard", web::get().to(dashboard_summary))
                    .route("/revenue", web::get().to(revenue_report))
                    .route("/outstanding", web::get().to(outstanding_report)),
            ),
    );
}
