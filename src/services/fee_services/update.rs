use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::FeeServiceService;
use crate::models::{
    ApiResponse, ErrorCode,
    fee_services::{requests::UpdateFeeServiceRequest, responses::FeeServiceResponse},
};
use crate::services::storage_error_response;
use crate::utils::validate::validate_amount_cents;

pub async fn update_fee_service(
    service: &FeeServiceService,
    service_id: i64,
    update_data: UpdateFeeServiceRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Some(price) = update_data.monthly_price_cents
        && let Err(msg) = validate_amount_cents(price)
    {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::ValidationError, msg)));
    }

    let storage = service.get_storage(request);

    match storage.update_fee_service(service_id, update_data).await {
        Ok(Some(fee_service)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            FeeServiceResponse {
                service: fee_service,
            },
            "收费项目更新成功",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::RecordNotFound,
            format!("Fee service {service_id} not found"),
        ))),
        Err(e) => Ok(storage_error_response(&e, "Fee service update failed")),
    }
}
