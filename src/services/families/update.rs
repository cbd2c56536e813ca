use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::FamilyService;
use crate::models::{
    ApiResponse, ErrorCode,
    families::{requests::UpdateFamilyRequest, responses::FamilyResponse},
};
use crate::services::storage_error_response;
use crate::utils::validate::{validate_email, validate_name};

pub async fn update_family(
    service: &FamilyService,
    family_id: i64,
    update_data: UpdateFamilyRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Some(ref name) = update_data.family_name
        && let Err(msg) = validate_name(name)
    {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::ValidationError, msg)));
    }

    if let Some(ref email) = update_data.contact_email
        && let Err(msg) = validate_email(email)
    {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::ValidationError, msg)));
    }

    let storage = service.get_storage(request);

    match storage.update_family(family_id, update_data).await {
        Ok(Some(family)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            FamilyResponse { family },
            "家庭更新成功",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::RecordNotFound,
            format!("Family {family_id} not found"),
        ))),
        Err(e) => Ok(storage_error_response(&e, "Family update failed")),
    }
}
