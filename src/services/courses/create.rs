use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::time::Instant;

use super::CourseService;
use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse, ErrorCode,
    courses::{requests::CreateCourseRequest, responses::CourseResponse},
    users::entities::UserRole,
};
use crate::services::storage_error_response;
use crate::utils::validate::validate_name;

pub async fn create_course(
    service: &CourseService,
    mut course_data: CreateCourseRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let started = Instant::now();

    if let Err(msg) = validate_name(&course_data.course_name) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::ValidationError, msg)));
    }

    if let Some(capacity) = course_data.capacity
        && capacity <= 0
    {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationError,
            "Capacity must be positive",
        )));
    }

    // 教师创建课程时默认指定自己为授课教师
    if let Some(user) = RequireJWT::extract_user_claims(request)
        && user.role == UserRole::Teacher
    {
        match course_data.teacher_id {
            None => course_data.teacher_id = Some(user.id),
            Some(teacher_id) if teacher_id != user.id => {
                return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                    ErrorCode::Forbidden,
                    "Teachers can only create their own courses",
                )));
            }
            Some(_) => {}
        }
    }

    let storage = service.get_storage(request);

    match storage.create_course(course_data).await {
        Ok(course) => Ok(HttpResponse::Created().json(
            ApiResponse::success(CourseResponse { course }, "课程创建成功").with_duration(started),
        )),
        Err(e) => Ok(storage_error_response(&e, "Course creation failed")),
    }
}
