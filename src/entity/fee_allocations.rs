//! 费用分摊实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "fee_allocations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub subscription_id: i64,
    pub student_id: i64,
    pub family_id: i64,
    pub period: String,
    pub gross_amount_cents: i64,
    pub discount_amount_cents: i64,
    pub net_amount_cents: i64,
    pub status: String,
    pub payment_id: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::subscriptions::Entity",
        from = "Column::SubscriptionId",
        to = "super::subscriptions::Column::Id"
    )]
    Subscriptions,
    #[sea_orm(
        belongs_to = "super::students::Entity",
        from = "Column::StudentId",
        to = "super::students::Column::Id"
    )]
    Students,
    #[sea_orm(
        belongs_to = "super::families::Entity",
        from = "Column::FamilyId",
        to = "super::families::Column::Id"
    )]
    Families,
    #[sea_orm(
        belongs_to = "super::payments::Entity",
        from = "Column::PaymentId",
        to = "super::payments::Column::Id"
    )]
    Payments,
}

impl Related<super::subscriptions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Subscriptions.def()
    }
}

impl Related<super::students::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Students.def()
    }
}

impl Related<super::families::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Families.def()
    }
}

impl Related<super::payments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Payments.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_allocation(self) -> crate::models::billing::entities::FeeAllocation {
        use crate::models::billing::entities::{AllocationStatus, FeeAllocation};
        use chrono::{DateTime, Utc};

        FeeAllocation {
            id: self.id,
            subscription_id: self.subscription_id,
            student_id: self.student_id,
            family_id: self.family_id,
            period: self.period,
            gross_amount_cents: self.gross_amount_cents,
            discount_amount_cents: self.discount_amount_cents,
            net_amount_cents: self.net_amount_cents,
            status: self
                .status
                .parse::<AllocationStatus>()
                .unwrap_or(AllocationStatus::Pending),
            payment_id: self.payment_id,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
