//! Spend records and per-period spend figures
//!
//! `SpendEntry` is what the store persists; `CategorySpend` and `PeriodSpend`
//! are the aggregates the progress calculator consumes.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::CategoryKey;
use super::ids::SpendId;
use super::money::Money;

/// A single recorded purchase
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpendEntry {
    pub id: SpendId,
    pub date: NaiveDate,
    pub category: CategoryKey,
    pub amount: Money,

    #[serde(default)]
    pub memo: String,

    pub created_at: DateTime<Utc>,
}

impl SpendEntry {
    pub fn new(date: NaiveDate, category: CategoryKey, amount: Money) -> Self {
        Self {
            id: SpendId::new(),
            date,
            category,
            amount,
            memo: String::new(),
            created_at: Utc::now(),
        }
    }

    pub fn with_memo(mut self, memo: impl Into<String>) -> Self {
        self.memo = memo.into();
        self
    }
}

impl fmt::Display for SpendEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.date, self.category, self.amount)
    }
}

/// Total spend for one category within a period
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySpend {
    pub category: CategoryKey,
    pub spend: Money,
}

impl CategorySpend {
    pub fn new(category: impl Into<CategoryKey>, spend: Money) -> Self {
        Self {
            category: category.into(),
            spend,
        }
    }
}

/// Aggregate spend and calendar position for a period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodSpend {
    pub total_spend: Money,
    pub days_elapsed: u32,
    pub days_in_month: u32,
}

impl PeriodSpend {
    pub fn new(total_spend: Money, days_elapsed: u32, days_in_month: u32) -> Self {
        Self {
            total_spend,
            days_elapsed,
            days_in_month,
        }
    }

    /// No spend recorded yet, e.g. the first day of the month
    pub fn empty(days_elapsed: u32, days_in_month: u32) -> Self {
        Self::new(Money::zero(), days_elapsed, days_in_month)
    }
}
