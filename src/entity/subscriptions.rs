//! 订阅实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "subscriptions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub student_id: i64,
    pub fee_service_id: i64,
    pub discount_percent: i32,
    pub started_at: i64,
    pub ended_at: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::students::Entity",
        from = "Column::StudentId",
        to = "super::students::Column::Id"
    )]
    Students,
    #[sea_orm(
        belongs_to = "super::fee_services::Entity",
        from = "Column::FeeServiceId",
        to = "super::fee_services::Column::Id"
    )]
    FeeServices,
    #[sea_orm(has_many = "super::fee_allocations::Entity")]
    FeeAllocations,
}

impl Related<super::students::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Students.def()
    }
}

impl Related<super::fee_services::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FeeServices.def()
    }
}

impl Related<super::fee_allocations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FeeAllocations.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_subscription(self) -> crate::models::subscriptions::entities::Subscription {
        use crate::models::subscriptions::entities::Subscription;
        use chrono::{DateTime, Utc};

        Subscription {
            id: self.id,
            student_id: self.student_id,
            fee_service_id: self.fee_service_id,
            discount_percent: self.discount_percent,
            started_at: DateTime::<Utc>::from_timestamp(self.started_at, 0).unwrap_or_default(),
            ended_at: self
                .ended_at
                .map(|ts| DateTime::<Utc>::from_timestamp(ts, 0).unwrap_or_default()),
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
