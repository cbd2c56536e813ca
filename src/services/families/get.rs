use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::FamilyService;
use crate::models::{
    ApiResponse, ErrorCode,
    families::responses::FamilyDetailResponse,
};
use crate::services::{parent_family_scope, storage_error_response};

pub async fn get_family(
    service: &FamilyService,
    family_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    // 家长只能查看本家庭
    if let Some(scope) = parent_family_scope(request)
        && scope != family_id
    {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::Forbidden,
            "Access denied.",
        )));
    }

    let storage = service.get_storage(request);

    let family = match storage.get_family_by_id(family_id).await {
        Ok(Some(family)) => family,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::RecordNotFound,
                format!("Family {family_id} not found"),
            )));
        }
        Err(e) => return Ok(storage_error_response(&e, "Failed to retrieve family")),
    };

    match storage.list_students_by_family(family_id).await {
        Ok(students) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            FamilyDetailResponse { family, students },
            "Family retrieved successfully",
        ))),
        Err(e) => Ok(storage_error_response(&e, "Failed to retrieve family students")),
    }
}
