use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::time::Instant;

use super::FeeServiceService;
use crate::models::{
    ApiResponse,
    fee_services::requests::{FeeServiceListQuery, FeeServiceQueryParams},
};
use crate::services::storage_error_response;

pub async fn list_fee_services(
    service: &FeeServiceService,
    query: FeeServiceQueryParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let started = Instant::now();
    let storage = service.get_storage(request);

    let list_query = FeeServiceListQuery {
        page: Some(query.pagination.page),
        size: Some(query.pagination.size),
        search: query.search,
        include_inactive: query.include_inactive,
    };

    match storage.list_fee_services_with_pagination(list_query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(
            ApiResponse::success(response, "Fee service list retrieved successfully")
                .with_duration(started),
        )),
        Err(e) => Ok(storage_error_response(
            &e,
            "Failed to retrieve fee service list",
        )),
    }
}
