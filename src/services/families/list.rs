use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::time::Instant;

use super::FamilyService;
use crate::models::{
    ApiResponse,
    families::requests::{FamilyListQuery, FamilyQueryParams},
};
use crate::services::{parent_family_scope, storage_error_response};

pub async fn list_families(
    service: &FamilyService,
    query: FamilyQueryParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let started = Instant::now();
    let storage = service.get_storage(request);

    let list_query = FamilyListQuery {
        page: Some(query.pagination.page),
        size: Some(query.pagination.size),
        search: query.search,
        include_inactive: query.include_inactive,
        // 家长门户自动限定本家庭
        family_id: parent_family_scope(request),
    };

    match storage.list_families_with_pagination(list_query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(
            ApiResponse::success(response, "Family list retrieved successfully")
                .with_duration(started),
        )),
        Err(e) => Ok(storage_error_response(&e, "Failed to retrieve family list")),
    }
}
