use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{DynamicConfig, SystemService};
use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse, ErrorCode,
    system::{requests::UpdateSettingRequest, responses::SettingsResponse},
};
use crate::services::storage_error_response;

pub async fn get_settings(
    service: &SystemService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_all_settings().await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            SettingsResponse { items },
            "Settings retrieved successfully",
        ))),
        Err(e) => Ok(storage_error_response(&e, "Failed to retrieve settings")),
    }
}

pub async fn update_setting(
    service: &SystemService,
    key: String,
    update_data: UpdateSettingRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let updated_by = RequireJWT::extract_user_id(request);

    match storage
        .update_setting(&key, &update_data.value, updated_by)
        .await
    {
        Ok(Some(setting)) => {
            // 同步到热更新缓存
            DynamicConfig::update(&setting.key, &setting.value).await;
            Ok(HttpResponse::Ok().json(ApiResponse::success(setting, "设置更新成功")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::RecordNotFound,
            format!("Setting '{key}' not found"),
        ))),
        Err(e) => Ok(storage_error_response(&e, "Setting update failed")),
    }
}
