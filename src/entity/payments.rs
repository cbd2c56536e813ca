//! 缴费实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "payments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub family_id: i64,
    pub amount_cents: i64,
    pub method: String,
    #[sea_orm(unique)]
    pub reference: String,
    pub note: Option<String>,
    pub paid_at: i64,
    pub created_by: Option<i64>,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::families::Entity",
        from = "Column::FamilyId",
        to = "super::families::Column::Id"
    )]
    Families,
    #[sea_orm(has_many = "super::fee_allocations::Entity")]
    FeeAllocations,
}

impl Related<super::families::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Families.def()
    }
}

impl Related<super::fee_allocations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FeeAllocations.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_payment(self) -> crate::models::payments::entities::Payment {
        use crate::models::payments::entities::{Payment, PaymentMethod};
        use chrono::{DateTime, Utc};

        Payment {
            id: self.id,
            family_id: self.family_id,
            amount_cents: self.amount_cents,
            method: self
                .method
                .parse::<PaymentMethod>()
                .unwrap_or(PaymentMethod::Cash),
            reference: self.reference,
            note: self.note,
            paid_at: DateTime::<Utc>::from_timestamp(self.paid_at, 0).unwrap_or_default(),
            created_by: self.created_by,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
        }
    }
}
