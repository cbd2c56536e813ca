use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::time::Instant;

use super::StudentService;
use crate::models::{
    ApiResponse, ErrorCode,
    students::{requests::CreateStudentRequest, responses::StudentResponse},
};
use crate::services::storage_error_response;
use crate::utils::validate::validate_name;

pub async fn create_student(
    service: &StudentService,
    student_data: CreateStudentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let started = Instant::now();

    if let Err(msg) = validate_name(&student_data.first_name) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::ValidationError, msg)));
    }
    if let Err(msg) = validate_name(&student_data.last_name) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::ValidationError, msg)));
    }

    // 出生日期可选，给了就必须是合法的 YYYY-MM-DD
    if let Some(ref dob) = student_data.date_of_birth
        && chrono::NaiveDate::parse_from_str(dob, "%Y-%m-%d").is_err()
    {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationError,
            "date_of_birth must be formatted as YYYY-MM-DD",
        )));
    }

    let storage = service.get_storage(request);

    match storage.create_student(student_data).await {
        Ok(student) => Ok(HttpResponse::Created().json(
            ApiResponse::success(StudentResponse { student }, "学生创建成功")
                .with_duration(started),
        )),
        Err(e) => Ok(storage_error_response(&e, "Student creation failed")),
    }
}
