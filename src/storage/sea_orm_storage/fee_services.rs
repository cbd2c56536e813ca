use super::SeaOrmStorage;
use crate::entity::fee_services::{ActiveModel, Column, Entity as FeeServices};
use crate::errors::Result;
use crate::models::{
    PaginationInfo,
    common::pagination::{clamp_page, clamp_size},
    fee_services::{
        entities::FeeService,
        requests::{CreateFeeServiceRequest, FeeServiceListQuery, UpdateFeeServiceRequest},
        responses::FeeServiceListResponse,
    },
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 创建收费项目，名称唯一
    pub async fn create_fee_service_impl(&self, req: CreateFeeServiceRequest) -> Result<FeeService> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            service_name: Set(req.service_name),
            description: Set(req.description),
            monthly_price_cents: Set(req.monthly_price_cents),
            is_active: Set(true),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model.insert(&self.db).await?;
        Ok(result.into_fee_service())
    }

    /// 通过 ID 获取收费项目
    pub async fn get_fee_service_by_id_impl(&self, id: i64) -> Result<Option<FeeService>> {
        let result = FeeServices::find_by_id(id).one(&self.db).await?;
        Ok(result.map(|m| m.into_fee_service()))
    }

    /// 分页列出收费项目
    pub async fn list_fee_services_with_pagination_impl(
        &self,
        query: FeeServiceListQuery,
    ) -> Result<FeeServiceListResponse> {
        let page = clamp_page(query.page);
        let size = clamp_size(query.size);

        let mut select = FeeServices::find();

        if !query.include_inactive.unwrap_or(false) {
            select = select.filter(Column::IsActive.eq(true));
        }

        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(Column::ServiceName.contains(&escaped));
        }

        select = select.order_by_asc(Column::ServiceName);

        let paginator = select.paginate(&self.db, size);
        let total = paginator.num_items().await?;
        let pages = paginator.num_pages().await?;
        let services = paginator.fetch_page(page - 1).await?;

        Ok(FeeServiceListResponse {
            items: services.into_iter().map(|m| m.into_fee_service()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 更新收费项目
    pub async fn update_fee_service_impl(
        &self,
        id: i64,
        update: UpdateFeeServiceRequest,
    ) -> Result<Option<FeeService>> {
        let existing = self.get_fee_service_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(service_name) = update.service_name {
            model.service_name = Set(service_name);
        }
        if let Some(description) = update.description {
            model.description = Set(Some(description));
        }
        if let Some(price) = update.monthly_price_cents {
            model.monthly_price_cents = Set(price);
        }
        if let Some(is_active) = update.is_active {
            model.is_active = Set(is_active);
        }

        let updated = model.update(&self.db).await?;
        Ok(Some(updated.into_fee_service()))
    }

    /// 停用收费项目（幂等）
    pub async fn deactivate_fee_service_impl(&self, id: i64) -> Result<bool> {
        let existing = FeeServices::find_by_id(id).one(&self.db).await?;
        let Some(existing) = existing else {
            return Ok(false);
        };

        if existing.is_active {
            let now = chrono::Utc::now().timestamp();
            let model = ActiveModel {
                id: Set(id),
                is_active: Set(false),
                updated_at: Set(now),
                ..Default::default()
            };
            model.update(&self.db).await?;
        }

        Ok(true)
    }
}
