pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::fee_services::requests::{
    CreateFeeServiceRequest, FeeServiceQueryParams, UpdateFeeServiceRequest,
};
use crate::storage::Storage;

pub struct FeeServiceService {
    storage: Option<Arc<dyn Storage>>,
}

impl FeeServiceService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 获取收费项目列表
    pub async fn list_fee_services(
        &self,
        query: FeeServiceQueryParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_fee_services(self, query, request).await
    }

    // 创建收费项目
    pub async fn create_fee_service(
        &self,
        service_data: CreateFeeServiceRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_fee_service(self, service_data, request).await
    }

    // 收费项目详情
    pub async fn get_fee_service(
        &self,
        service_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        get::get_fee_service(self, service_id, request).await
    }

    // 更新收费项目
    pub async fn update_fee_service(
        &self,
        service_id: i64,
        update_data: UpdateFeeServiceRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_fee_service(self, service_id, update_data, request).await
    }

    // 停用收费项目
    pub async fn delete_fee_service(
        &self,
        service_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_fee_service(self, service_id, request).await
    }
}
