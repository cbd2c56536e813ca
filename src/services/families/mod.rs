pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::families::requests::{
    CreateFamilyRequest, FamilyQueryParams, UpdateFamilyRequest,
};
use crate::storage::Storage;

pub struct FamilyService {
    storage: Option<Arc<dyn Storage>>,
}

impl FamilyService {
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

    // 获取家庭列表
    pub async fn list_families(
        &self,
        query: FamilyQueryParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_families(self, query, request).await
    }

    // 创建家庭
    pub async fn create_family(
        &self,
        family_data: CreateFamilyRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_family(self, family_data, request).await
    }

    // 家庭详情（含学生）
    pub async fn get_family(
        &self,
        family_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        get::get_family(self, family_id, request).await
    }

    // 更新家庭信息
    pub async fn update_family(
        &self,
        family_id: i64,
        update_data: UpdateFamilyRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_family(self, family_id, update_data, request).await
    }

    // 软删除家庭
    pub async fn delete_family(
        &self,
        family_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_family(self, family_id, request).await
    }
}
