pub mod list;
pub mod run;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::billing::requests::{AllocationQueryParams, BillingRunRequest};
use crate::storage::Storage;

pub struct BillingService {
    storage: Option<Arc<dyn Storage>>,
}

impl BillingService {
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

    // 为账期出账
    pub async fn run_billing(
        &self,
        run_request: BillingRunRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        run::run_billing(self, run_request, request).await
    }

    // 列出费用分摊
    pub async fn list_allocations(
        &self,
        query: AllocationQueryParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_allocations(self, query, request).await
    }
}
