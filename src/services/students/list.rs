use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::time::Instant;

use super::StudentService;
use crate::models::{
    ApiResponse,
    students::requests::{StudentListQuery, StudentQueryParams},
};
use crate::services::{parent_family_scope, storage_error_response};

pub async fn list_students(
    service: &StudentService,
    query: StudentQueryParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let started = Instant::now();
    let storage = service.get_storage(request);

    // 家长门户强制限定本家庭，忽略请求中的 family_id
    let family_id = parent_family_scope(request).or(query.family_id);

    let list_query = StudentListQuery {
        page: Some(query.pagination.page),
        size: Some(query.pagination.size),
        family_id,
        search: query.search,
        include_inactive: query.include_inactive,
    };

    match storage.list_students_with_pagination(list_query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(
            ApiResponse::success(response, "Student list retrieved successfully")
                .with_duration(started),
        )),
        Err(e) => Ok(storage_error_response(&e, "Failed to retrieve student list")),
    }
}
