use super::SeaOrmStorage;
use crate::entity::fee_allocations;
use crate::entity::payments::{ActiveModel, Column, Entity as Payments};
use crate::errors::{IMSystemError, Result};
use crate::models::{
    PaginationInfo,
    billing::entities::{AllocationStatus, FeeAllocation},
    common::pagination::{clamp_page, clamp_size},
    payments::{
        entities::Payment,
        requests::PaymentListQuery,
        responses::PaymentListResponse,
    },
};
use crate::storage::NewPayment;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};
use tracing::info;

impl SeaOrmStorage {
    /// 事务性录入缴费并结清分摊
    ///
    /// 校验规则：
    /// - 所有分摊必须存在、处于待缴状态且属于该家庭
    /// - 缴费金额必须等于分摊净额之和
    /// 任一校验失败则整体回滚。
    pub async fn create_payment_with_allocations_impl(
        &self,
        payment: NewPayment,
    ) -> Result<Payment> {
        if payment.allocation_ids.is_empty() {
            return Err(IMSystemError::validation("缴费必须至少结清一条分摊"));
        }

        let txn = self.db.begin().await?;

        let allocations = fee_allocations::Entity::find()
            .filter(fee_allocations::Column::Id.is_in(payment.allocation_ids.clone()))
            .all(&txn)
            .await?;

        if allocations.len() != payment.allocation_ids.len() {
            return Err(IMSystemError::not_found("部分分摊不存在"));
        }

        let mut net_sum = 0i64;
        for allocation in &allocations {
            if allocation.family_id != payment.family_id {
                return Err(IMSystemError::validation(format!(
                    "分摊 {} 不属于家庭 {}",
                    allocation.id, payment.family_id
                )));
            }
            if allocation.status != AllocationStatus::Pending.to_string() {
                return Err(IMSystemError::validation(format!(
                    "分摊 {} 不在待缴状态",
                    allocation.id
                )));
            }
            net_sum += allocation.net_amount_cents;
        }

        if net_sum != payment.amount_cents {
            return Err(IMSystemError::payment_mismatch(format!(
                "缴费金额 {} 与分摊净额合计 {} 不一致",
                payment.amount_cents, net_sum
            )));
        }

        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            family_id: Set(payment.family_id),
            amount_cents: Set(payment.amount_cents),
            method: Set(payment.method.to_string()),
            reference: Set(payment.reference.clone()),
            note: Set(payment.note.clone()),
            paid_at: Set(now),
            created_by: Set(payment.created_by),
            created_at: Set(now),
            ..Default::default()
        };

        let inserted = model.insert(&txn).await?;

        for allocation in allocations {
            let update = fee_allocations::ActiveModel {
                id: Set(allocation.id),
                status: Set(AllocationStatus::Paid.to_string()),
                payment_id: Set(Some(inserted.id)),
                updated_at: Set(now),
                ..Default::default()
            };
            update.update(&txn).await?;
        }

        txn.commit().await?;

        info!(
            "Payment {} recorded for family {}: {} cents, {} allocation(s) settled",
            inserted.reference,
            inserted.family_id,
            inserted.amount_cents,
            payment.allocation_ids.len()
        );

        Ok(inserted.into_payment())
    }

    /// 通过 ID 获取缴费记录
    pub async fn get_payment_by_id_impl(&self, id: i64) -> Result<Option<Payment>> {
        let result = Payments::find_by_id(id).one(&self.db).await?;
        Ok(result.map(|m| m.into_payment()))
    }

    /// 分页列出缴费记录
    pub async fn list_payments_with_pagination_impl(
        &self,
        query: PaymentListQuery,
    ) -> Result<PaymentListResponse> {
        let page = clamp_page(query.page);
        let size = clamp_size(query.size);

        let mut select = Payments::find();

        if let Some(family_id) = query.family_id {
            select = select.filter(Column::FamilyId.eq(family_id));
        }

        select = select.order_by_desc(Column::PaidAt);

        let paginator = select.paginate(&self.db, size);
        let total = paginator.num_items().await?;
        let pages = paginator.num_pages().await?;
        let payments = paginator.fetch_page(page - 1).await?;

        Ok(PaymentListResponse {
            items: payments.into_iter().map(|m| m.into_payment()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 缴费结清的分摊明细
    pub async fn list_allocations_by_payment_impl(
        &self,
        payment_id: i64,
    ) -> Result<Vec<FeeAllocation>> {
        let rows = fee_allocations::Entity::find()
            .filter(fee_allocations::Column::PaymentId.eq(payment_id))
            .order_by_asc(fee_allocations::Column::Id)
            .all(&self.db)
            .await?;

        Ok(rows.into_iter().map(|m| m.into_allocation()).collect())
    }
}
