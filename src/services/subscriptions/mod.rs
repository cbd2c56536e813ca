pub mod create;
pub mod end;
pub mod list;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::subscriptions::requests::{CreateSubscriptionRequest, SubscriptionListQuery};
use crate::storage::Storage;

pub struct SubscriptionService {
    storage: Option<Arc<dyn Storage>>,
}

impl SubscriptionService {
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

    // 创建订阅
    pub async fn create_subscription(
        &self,
        subscription_data: CreateSubscriptionRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_subscription(self, subscription_data, request).await
    }

    // 结束订阅
    pub async fn end_subscription(
        &self,
        subscription_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        end::end_subscription(self, subscription_id, request).await
    }

    // 列出订阅
    pub async fn list_subscriptions(
        &self,
        query: SubscriptionListQuery,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_subscriptions(self, query, request).await
    }
}
