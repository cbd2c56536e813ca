use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::FeeServiceService;
use crate::models::{
    ApiResponse, ErrorCode,
    fee_services::responses::FeeServiceResponse,
};
use crate::services::storage_error_response;

pub async fn get_fee_service(
    service: &FeeServiceService,
    service_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_fee_service_by_id(service_id).await {
        Ok(Some(fee_service)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            FeeServiceResponse {
                service: fee_service,
            },
            "Fee service retrieved successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::RecordNotFound,
            format!("Fee service {service_id} not found"),
        ))),
        Err(e) => Ok(storage_error_response(&e, "Failed to retrieve fee service")),
    }
}
