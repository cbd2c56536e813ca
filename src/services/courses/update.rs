use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::CourseService;
use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse, ErrorCode,
    courses::{requests::UpdateCourseRequest, responses::CourseResponse},
    users::entities::UserRole,
};
use crate::services::storage_error_response;

pub async fn update_course(
    service: &CourseService,
    course_id: i64,
    update_data: UpdateCourseRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 教师只能更新自己授课的课程
    if let Some(user) = RequireJWT::extract_user_claims(request)
        && user.role == UserRole::Teacher
    {
        match storage.get_course_by_id(course_id).await {
            Ok(Some(course)) if course.teacher_id != Some(user.id) => {
                return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                    ErrorCode::Forbidden,
                    "Teachers can only update their own courses",
                )));
            }
            Ok(Some(_)) => {}
            Ok(None) => {
                return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                    ErrorCode::RecordNotFound,
                    format!("Course {course_id} not found"),
                )));
            }
            Err(e) => return Ok(storage_error_response(&e, "Failed to retrieve course")),
        }
    }

    match storage.update_course(course_id, update_data).await {
        Ok(Some(course)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            CourseResponse { course },
            "课程更新成功",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::RecordNotFound,
            format!("Course {course_id} not found"),
        ))),
        Err(e) => Ok(storage_error_response(&e, "Course update failed")),
    }
}
