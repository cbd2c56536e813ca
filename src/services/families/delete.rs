use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::FamilyService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::storage_error_response;

pub async fn delete_family(
    service: &FamilyService,
    family_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 还有在读学生的家庭不允许停用
    match storage.list_students_by_family(family_id).await {
        Ok(students) => {
            if students.iter().any(|s| s.is_active) {
                return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                    ErrorCode::DependencyConflict,
                    "Family still has active students",
                )));
            }
        }
        Err(e) => return Ok(storage_error_response(&e, "Failed to check family students")),
    }

    // 软删除：只置 is_active = false，重复停用幂等
    match storage.deactivate_family(family_id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty("家庭已停用"))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::RecordNotFound,
            format!("Family {family_id} not found"),
        ))),
        Err(e) => Ok(storage_error_response(&e, "Family deactivation failed")),
    }
}
