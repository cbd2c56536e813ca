use std::collections::{HashMap, HashSet};

use super::SeaOrmStorage;
use crate::entity::fee_allocations::{ActiveModel, Column, Entity as FeeAllocations};
use crate::entity::{fee_services, students, subscriptions};
use crate::errors::Result;
use crate::models::{
    PaginationInfo,
    billing::{
        entities::{AllocationStatus, BillingSource, FeeAllocation, split_amounts},
        requests::AllocationListQuery,
        responses::AllocationListResponse,
    },
    common::pagination::{clamp_page, clamp_size},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};
use tracing::info;

impl SeaOrmStorage {
    /// 收集出账数据源：未结束订阅，且学生在读、收费项目启用
    async fn collect_billing_sources(&self) -> Result<Vec<BillingSource>> {
        let subs = subscriptions::Entity::find()
            .filter(subscriptions::Column::EndedAt.is_null())
            .all(&self.db)
            .await?;

        if subs.is_empty() {
            return Ok(Vec::new());
        }

        let student_rows = students::Entity::find()
            .filter(students::Column::IsActive.eq(true))
            .all(&self.db)
            .await?;
        let students_by_id: HashMap<i64, i64> = student_rows
            .into_iter()
            .map(|s| (s.id, s.family_id))
            .collect();

        let service_rows = fee_services::Entity::find()
            .filter(fee_services::Column::IsActive.eq(true))
            .all(&self.db)
            .await?;
        let prices_by_id: HashMap<i64, i64> = service_rows
            .into_iter()
            .map(|s| (s.id, s.monthly_price_cents))
            .collect();

        let sources = subs
            .into_iter()
            .filter_map(|sub| {
                let family_id = students_by_id.get(&sub.student_id)?;
                let price = prices_by_id.get(&sub.fee_service_id)?;
                Some(BillingSource {
                    subscription_id: sub.id,
                    student_id: sub.student_id,
                    family_id: *family_id,
                    discount_percent: sub.discount_percent,
                    monthly_price_cents: *price,
                })
            })
            .collect();

        Ok(sources)
    }

    /// 为账期生成费用分摊
    ///
    /// 同一订阅同一账期只生成一条记录，重复出账时已有记录被跳过。
    /// 整个写入在单个事务中完成。
    pub async fn run_billing_for_period_impl(&self, period: &str) -> Result<(i64, i64)> {
        let sources = self.collect_billing_sources().await?;

        let existing: HashSet<i64> = FeeAllocations::find()
            .filter(Column::Period.eq(period))
            .all(&self.db)
            .await?
            .into_iter()
            .map(|a| a.subscription_id)
            .collect();

        let now = chrono::Utc::now().timestamp();
        let mut created = 0i64;
        let mut skipped = 0i64;

        let txn = self.db.begin().await?;

        for source in sources {
            if existing.contains(&source.subscription_id) {
                skipped += 1;
                continue;
            }

            let (gross, discount, net) =
                split_amounts(source.monthly_price_cents, source.discount_percent);

            let model = ActiveModel {
                subscription_id: Set(source.subscription_id),
                student_id: Set(source.student_id),
                family_id: Set(source.family_id),
                period: Set(period.to_string()),
                gross_amount_cents: Set(gross),
                discount_amount_cents: Set(discount),
                net_amount_cents: Set(net),
                status: Set(AllocationStatus::Pending.to_string()),
                payment_id: Set(None),
                created_at: Set(now),
                updated_at: Set(now),
                ..Default::default()
            };
            model.insert(&txn).await?;
            created += 1;
        }

        txn.commit().await?;

        info!(
            "Billing run for {} completed: {} created, {} skipped",
            period, created, skipped
        );

        Ok((created, skipped))
    }

    /// 分页列出分摊
    pub async fn list_allocations_with_pagination_impl(
        &self,
        query: AllocationListQuery,
    ) -> Result<AllocationListResponse> {
        let page = clamp_page(query.page);
        let size = clamp_size(query.size);

        let mut select = FeeAllocations::find();

        if let Some(family_id) = query.family_id {
            select = select.filter(Column::FamilyId.eq(family_id));
        }
        if let Some(student_id) = query.student_id {
            select = select.filter(Column::StudentId.eq(student_id));
        }
        if let Some(status) = query.status {
            select = select.filter(Column::Status.eq(status.to_string()));
        }
        if let Some(ref period) = query.period {
            select = select.filter(Column::Period.eq(period));
        }

        select = select
            .order_by_desc(Column::Period)
            .order_by_desc(Column::Id);

        let paginator = select.paginate(&self.db, size);
        let total = paginator.num_items().await?;
        let pages = paginator.num_pages().await?;
        let allocations = paginator.fetch_page(page - 1).await?;

        Ok(AllocationListResponse {
            items: allocations.into_iter().map(|m| m.into_allocation()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 通过 ID 获取分摊
    pub async fn get_allocation_by_id_impl(&self, id: i64) -> Result<Option<FeeAllocation>> {
        let result = FeeAllocations::find_by_id(id).one(&self.db).await?;
        Ok(result.map(|m| m.into_allocation()))
    }
}
