use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::time::Instant;

use super::FamilyService;
use crate::models::{
    ApiResponse, ErrorCode,
    families::{requests::CreateFamilyRequest, responses::FamilyResponse},
};
use crate::services::storage_error_response;
use crate::utils::validate::{validate_email, validate_name};

pub async fn create_family(
    service: &FamilyService,
    family_data: CreateFamilyRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let started = Instant::now();

    if let Err(msg) = validate_name(&family_data.family_name) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::ValidationError, msg)));
    }

    if let Some(ref email) = family_data.contact_email
        && let Err(msg) = validate_email(email)
    {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::ValidationError, msg)));
    }

    let storage = service.get_storage(request);

    match storage.create_family(family_data).await {
        Ok(family) => Ok(HttpResponse::Created().json(
            ApiResponse::success(FamilyResponse { family }, "家庭创建成功").with_duration(started),
        )),
        Err(e) => Ok(storage_error_response(&e, "Family creation failed")),
    }
}
