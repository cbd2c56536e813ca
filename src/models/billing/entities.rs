use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 分摊状态
#[derive(Debug, Clone, Copy, Serialize, PartialEq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/billing.ts")]
pub enum AllocationStatus {
    Pending,   // 待缴
    Paid,      // 已缴
    Cancelled, // 已取消
}

impl<'de> Deserialize<'de> for AllocationStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Display for AllocationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AllocationStatus::Pending => write!(f, "pending"),
            AllocationStatus::Paid => write!(f, "paid"),
            AllocationStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

impl std::str::FromStr for AllocationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(AllocationStatus::Pending),
            "paid" => Ok(AllocationStatus::Paid),
            "cancelled" => Ok(AllocationStatus::Cancelled),
            _ => Err(format!("Invalid allocation status: {s}")),
        }
    }
}

// 费用分摊：某订阅在某账期产生的应缴记录
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/billing.ts")]
pub struct FeeAllocation {
    pub id: i64,
    pub subscription_id: i64,
    pub student_id: i64,
    pub family_id: i64,
    /// 账期，格式 YYYY-MM
    pub period: String,
    pub gross_amount_cents: i64,
    pub discount_amount_cents: i64,
    /// 恒等于 gross - discount
    pub net_amount_cents: i64,
    pub status: AllocationStatus,
    /// 结清该分摊的缴费记录
    pub payment_id: Option<i64>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

// 出账数据源：一条活跃订阅及计价所需字段（存储层内部使用）
#[derive(Debug, Clone)]
pub struct BillingSource {
    pub subscription_id: i64,
    pub student_id: i64,
    pub family_id: i64,
    pub discount_percent: i32,
    pub monthly_price_cents: i64,
}

/// 按月价和折扣百分比计算 (gross, discount, net)，全部为非负整数分
///
/// 折扣向下取整到分，净额 = 毛额 - 折扣。
pub fn split_amounts(monthly_price_cents: i64, discount_percent: i32) -> (i64, i64, i64) {
    let gross = monthly_price_cents.max(0);
    let percent = i64::from(discount_percent.clamp(0, 100));
    let discount = gross * percent / 100;
    let net = gross - discount;
    (gross, discount, net)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_amounts_no_discount() {
        assert_eq!(split_amounts(10_000, 0), (10_000, 0, 10_000));
    }

    #[test]
    fn test_split_amounts_rounds_discount_down() {
        // 3333 * 10% = 333.3 -> 折扣 333，净额 3000
        assert_eq!(split_amounts(3_333, 10), (3_333, 333, 3_000));
    }

    #[test]
    fn test_split_amounts_full_discount() {
        assert_eq!(split_amounts(5_000, 100), (5_000, 5_000, 0));
    }

    #[test]
    fn test_split_amounts_clamps_out_of_range() {
        assert_eq!(split_amounts(5_000, 150), (5_000, 5_000, 0));
        assert_eq!(split_amounts(5_000, -10), (5_000, 0, 5_000));
        assert_eq!(split_amounts(-100, 50), (0, 0, 0));
    }

    #[test]
    fn test_net_equals_gross_minus_discount() {
        for price in [0, 1, 99, 10_000, 123_456] {
            for percent in [0, 1, 33, 50, 99, 100] {
                let (gross, discount, net) = split_amounts(price, percent);
                assert_eq!(net, gross - discount);
                assert!(net >= 0 && discount >= 0);
            }
        }
    }
}
