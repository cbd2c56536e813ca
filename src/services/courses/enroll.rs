use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::CourseService;
use crate::models::{
    ApiResponse, ErrorCode,
    courses::responses::CourseRosterResponse,
};
use crate::services::storage_error_response;

pub async fn enroll_student(
    service: &CourseService,
    course_id: i64,
    student_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.enroll_student(course_id, student_id).await {
        Ok(enrollment) => Ok(HttpResponse::Created()
            .json(ApiResponse::success(enrollment, "选课成功"))),
        Err(e) => Ok(storage_error_response(&e, "Enrollment failed")),
    }
}

pub async fn unenroll_student(
    service: &CourseService,
    course_id: i64,
    student_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.unenroll_student(course_id, student_id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty("退课成功"))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::RecordNotFound,
            format!("Student {student_id} is not enrolled in course {course_id}"),
        ))),
        Err(e) => Ok(storage_error_response(&e, "Unenrollment failed")),
    }
}

pub async fn course_roster(
    service: &CourseService,
    course_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let course = match storage.get_course_by_id(course_id).await {
        Ok(Some(course)) => course,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::RecordNotFound,
                format!("Course {course_id} not found"),
            )));
        }
        Err(e) => return Ok(storage_error_response(&e, "Failed to retrieve course")),
    };

    match storage.list_course_students(course_id).await {
        Ok(students) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            CourseRosterResponse { course, students },
            "Course roster retrieved successfully",
        ))),
        Err(e) => Ok(storage_error_response(&e, "Failed to retrieve course roster")),
    }
}
