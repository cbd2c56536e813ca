use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::entity::{families, fee_allocations, payments, students};
use crate::errors::Result;
use crate::models::billing::entities::AllocationStatus;
use crate::models::reports::responses::{OutstandingFamily, RevenuePoint};
use chrono::{DateTime, Datelike, Utc};
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};

impl SeaOrmStorage {
    /// 活跃学生数
    pub async fn count_active_students_impl(&self) -> Result<i64> {
        let count = students::Entity::find()
            .filter(students::Column::IsActive.eq(true))
            .count(&self.db)
            .await?;
        Ok(count as i64)
    }

    /// 活跃家庭数
    pub async fn count_active_families_impl(&self) -> Result<i64> {
        let count = families::Entity::find()
            .filter(families::Column::IsActive.eq(true))
            .count(&self.db)
            .await?;
        Ok(count as i64)
    }

    /// 待缴净额合计，可限定单个家庭
    pub async fn sum_outstanding_cents_impl(&self, family_id: Option<i64>) -> Result<i64> {
        let mut select = fee_allocations::Entity::find()
            .filter(fee_allocations::Column::Status.eq(AllocationStatus::Pending.to_string()));

        if let Some(family_id) = family_id {
            select = select.filter(fee_allocations::Column::FamilyId.eq(family_id));
        }

        let rows = select.all(&self.db).await?;
        Ok(rows.iter().map(|a| a.net_amount_cents).sum())
    }

    /// 按月营收：含当月在内最近 N 个月，缺数据的月份补 0
    ///
    /// 聚合在应用侧完成，避免各数据库方言的日期函数差异。
    pub async fn revenue_by_month_impl(&self, months: u32) -> Result<Vec<RevenuePoint>> {
        let months = months.clamp(1, 36);
        let now = Utc::now();

        // 计算起始月份
        let mut year = now.year();
        let mut month = now.month() as i32 - (months as i32 - 1);
        while month < 1 {
            month += 12;
            year -= 1;
        }

        let cutoff = chrono::NaiveDate::from_ymd_opt(year, month as u32, 1)
            .unwrap_or_else(|| now.date_naive())
            .and_hms_opt(0, 0, 0)
            .map(|dt| dt.and_utc().timestamp())
            .unwrap_or(0);

        let rows = payments::Entity::find()
            .filter(payments::Column::PaidAt.gte(cutoff))
            .all(&self.db)
            .await?;

        let mut by_period: HashMap<String, i64> = HashMap::new();
        for payment in rows {
            let paid_at = DateTime::<Utc>::from_timestamp(payment.paid_at, 0).unwrap_or_default();
            let key = format!("{:04}-{:02}", paid_at.year(), paid_at.month());
            *by_period.entry(key).or_insert(0) += payment.amount_cents;
        }

        let mut items = Vec::with_capacity(months as usize);
        let mut cur_year = year;
        let mut cur_month = month as u32;
        for _ in 0..months {
            let key = format!("{cur_year:04}-{cur_month:02}");
            items.push(RevenuePoint {
                amount_cents: by_period.get(&key).copied().unwrap_or(0),
                period: key,
            });
            cur_month += 1;
            if cur_month > 12 {
                cur_month = 1;
                cur_year += 1;
            }
        }

        Ok(items)
    }

    /// 家庭欠费汇总，按欠费金额降序
    pub async fn outstanding_by_family_impl(&self) -> Result<Vec<OutstandingFamily>> {
        let rows = fee_allocations::Entity::find()
            .filter(fee_allocations::Column::Status.eq(AllocationStatus::Pending.to_string()))
            .find_also_related(families::Entity)
            .all(&self.db)
            .await?;

        let mut by_family: HashMap<i64, OutstandingFamily> = HashMap::new();
        for (allocation, family) in rows {
            let entry = by_family
                .entry(allocation.family_id)
                .or_insert_with(|| OutstandingFamily {
                    family_id: allocation.family_id,
                    family_name: family
                        .map(|f| f.family_name)
                        .unwrap_or_else(|| format!("family#{}", allocation.family_id)),
                    outstanding_cents: 0,
                    allocation_count: 0,
                });
            entry.outstanding_cents += allocation.net_amount_cents;
            entry.allocation_count += 1;
        }

        let mut items: Vec<OutstandingFamily> = by_family.into_values().collect();
        items.sort_by(|a, b| b.outstanding_cents.cmp(&a.outstanding_cents));
        Ok(items)
    }
}
