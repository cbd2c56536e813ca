use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::FeeServiceService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::storage_error_response;

pub async fn delete_fee_service(
    service: &FeeServiceService,
    service_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 停用而非删除，已有订阅与分摊保持引用完整
    match storage.deactivate_fee_service(service_id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty("收费项目已停用"))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::RecordNotFound,
            format!("Fee service {service_id} not found"),
        ))),
        Err(e) => Ok(storage_error_response(&e, "Fee service deactivation failed")),
    }
}
