use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::time::Instant;

use super::CourseService;
use crate::models::{
    ApiResponse,
    courses::requests::{CourseListQuery, CourseQueryParams},
};
use crate::services::storage_error_response;

pub async fn list_courses(
    service: &CourseService,
    query: CourseQueryParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let started = Instant::now();
    let storage = service.get_storage(request);

    let list_query = CourseListQuery {
        page: Some(query.pagination.page),
        size: Some(query.pagination.size),
        teacher_id: query.teacher_id,
        search: query.search,
    };

    match storage.list_courses_with_pagination(list_query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(
            ApiResponse::success(response, "Course list retrieved successfully")
                .with_duration(started),
        )),
        Err(e) => Ok(storage_error_response(&e, "Failed to retrieve course list")),
    }
}
