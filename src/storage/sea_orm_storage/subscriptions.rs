use super::SeaOrmStorage;
use crate::entity::subscriptions::{ActiveModel, Column, Entity as Subscriptions};
use crate::entity::{fee_services, students};
use crate::errors::{IMSystemError, Result};
use crate::models::subscriptions::{
    entities::Subscription,
    requests::{CreateSubscriptionRequest, SubscriptionListQuery},
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 创建订阅：学生在读、收费项目启用时才允许
    pub async fn create_subscription_impl(
        &self,
        req: CreateSubscriptionRequest,
    ) -> Result<Subscription> {
        let student = students::Entity::find_by_id(req.student_id)
            .one(&self.db)
            .await?
            .ok_or_else(|| IMSystemError::not_found(format!("学生 {} 不存在", req.student_id)))?;

        if !student.is_active {
            return Err(IMSystemError::validation(format!(
                "学生 {} 已停用，无法订阅",
                req.student_id
            )));
        }

        let service = fee_services::Entity::find_by_id(req.fee_service_id)
            .one(&self.db)
            .await?
            .ok_or_else(|| {
                IMSystemError::not_found(format!("收费项目 {} 不存在", req.fee_service_id))
            })?;

        if !service.is_active {
            return Err(IMSystemError::validation(format!(
                "收费项目 {} 已停用，无法订阅",
                req.fee_service_id
            )));
        }

        // 同一学生对同一项目只允许一条未结束订阅
        let duplicated = Subscriptions::find()
            .filter(Column::StudentId.eq(req.student_id))
            .filter(Column::FeeServiceId.eq(req.fee_service_id))
            .filter(Column::EndedAt.is_null())
            .one(&self.db)
            .await?;
        if duplicated.is_some() {
            return Err(IMSystemError::unique_violation(format!(
                "学生 {} 已订阅收费项目 {}",
                req.student_id, req.fee_service_id
            )));
        }

        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            student_id: Set(req.student_id),
            fee_service_id: Set(req.fee_service_id),
            discount_percent: Set(req.discount_percent),
            started_at: Set(now),
            ended_at: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model.insert(&self.db).await?;
        Ok(result.into_subscription())
    }

    /// 通过 ID 获取订阅
    pub async fn get_subscription_by_id_impl(&self, id: i64) -> Result<Option<Subscription>> {
        let result = Subscriptions::find_by_id(id).one(&self.db).await?;
        Ok(result.map(|m| m.into_subscription()))
    }

    /// 结束订阅：已结束的订阅保持原结束时间（幂等）
    pub async fn end_subscription_impl(&self, id: i64) -> Result<Option<Subscription>> {
        let existing = Subscriptions::find_by_id(id).one(&self.db).await?;
        let Some(existing) = existing else {
            return Ok(None);
        };

        if existing.ended_at.is_some() {
            return Ok(Some(existing.into_subscription()));
        }

        let now = chrono::Utc::now().timestamp();
        let model = ActiveModel {
            id: Set(id),
            ended_at: Set(Some(now)),
            updated_at: Set(now),
            ..Default::default()
        };

        let updated = model.update(&self.db).await?;
        Ok(Some(updated.into_subscription()))
    }

    /// 列出订阅
    pub async fn list_subscriptions_impl(
        &self,
        query: SubscriptionListQuery,
    ) -> Result<Vec<Subscription>> {
        let mut select = Subscriptions::find();

        if let Some(student_id) = query.student_id {
            select = select.filter(Column::StudentId.eq(student_id));
        }

        if !query.include_ended.unwrap_or(false) {
            select = select.filter(Column::EndedAt.is_null());
        }

        let rows = select.order_by_asc(Column::Id).all(&self.db).await?;
        Ok(rows.into_iter().map(|m| m.into_subscription()).collect())
    }
}
