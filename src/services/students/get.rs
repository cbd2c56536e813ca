use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::StudentService;
use crate::models::{
    ApiResponse, ErrorCode,
    students::responses::StudentDetailResponse,
    subscriptions::requests::SubscriptionListQuery,
};
use crate::services::{parent_family_scope, storage_error_response};

pub async fn get_student(
    service: &StudentService,
    student_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let student = match storage.get_student_by_id(student_id).await {
        Ok(Some(student)) => student,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::RecordNotFound,
                format!("Student {student_id} not found"),
            )));
        }
        Err(e) => return Ok(storage_error_response(&e, "Failed to retrieve student")),
    };

    // 家长只能查看本家庭的学生
    if let Some(scope) = parent_family_scope(request)
        && scope != student.family_id
    {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::Forbidden,
            "Access denied.",
        )));
    }

    let query = SubscriptionListQuery {
        student_id: Some(student_id),
        include_ended: Some(true),
    };

    match storage.list_subscriptions(query).await {
        Ok(subscriptions) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            StudentDetailResponse {
                student,
                subscriptions,
            },
            "Student retrieved successfully",
        ))),
        Err(e) => Ok(storage_error_response(
            &e,
            "Failed to retrieve student subscriptions",
        )),
    }
}
