pub mod dashboard;
pub mod outstanding;
pub mod revenue;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::reports::requests::RevenueQueryParams;
use crate::storage::Storage;

pub struct ReportService {
    storage: Option<Arc<dyn Storage>>,
}

impl ReportService {
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

    // 仪表盘汇总
    pub async fn dashboard_summary(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        dashboard::dashboard_summary(self, request).await
    }

    // 按月营收报表
    pub async fn revenue_report(
        &self,
        query: RevenueQueryParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        revenue::revenue_report(self, query, request).await
    }

    // 家庭欠费报表
    pub async fn outstanding_report(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        outstanding::outstanding_report(self, request).await
    }
}
