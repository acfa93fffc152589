//! Read-only progress views derived from a budget and its spend figures
//!
//! Nothing here is persisted. A fresh `BudgetProgress` is built every time
//! spend data changes.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::budget::Budget;
use super::category::CategoryKey;
use super::money::Money;
use super::period::BudgetPeriod;

/// Allowed gap between actual and calendar pace before it counts as ahead/behind
pub const PACE_TOLERANCE: f64 = 0.10;

/// Spend ratio at which a category starts warning
pub const WARNING_RATIO: f64 = 0.85;

/// Spend ratio at which the budget is exhausted
pub const OVER_RATIO: f64 = 1.0;

/// How spending compares to the share of the month that has elapsed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaceStatus {
    /// Spending slower than the calendar implies
    Ahead,
    OnTrack,
    /// Spending faster than the calendar implies
    Behind,
    /// Budget exhausted regardless of date
    Over,
}

impl PaceStatus {
    /// Classify `spend_ratio` against `expected_ratio`
    pub fn classify(spend_ratio: f64, expected_ratio: f64) -> Self {
        if spend_ratio >= OVER_RATIO {
            Self::Over
        } else if spend_ratio - expected_ratio > PACE_TOLERANCE {
            Self::Behind
        } else if expected_ratio - spend_ratio > PACE_TOLERANCE {
            Self::Ahead
        } else {
            Self::OnTrack
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Ahead => "Ahead",
            Self::OnTrack => "On track",
            Self::Behind => "Behind",
            Self::Over => "Over",
        }
    }
}

impl fmt::Display for PaceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One category's budget against its spend for the period
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryBudgetProgress {
    pub category: CategoryKey,
    pub budget_amount: Money,
    pub current_spend: Money,
    pub locked: bool,
}

impl CategoryBudgetProgress {
    pub fn new(category: impl Into<CategoryKey>, budget_amount: Money, current_spend: Money) -> Self {
        Self {
            category: category.into(),
            budget_amount,
            current_spend,
            locked: false,
        }
    }

    /// `current_spend / budget_amount`, 0 when nothing is budgeted
    pub fn spend_ratio(&self) -> f64 {
        self.current_spend.ratio_of(self.budget_amount)
    }

    /// Strictly over; exactly 100% is not yet over
    pub fn is_over_budget(&self) -> bool {
        self.current_spend > self.budget_amount
    }

    /// Rounded percent shown to the user, 0 when nothing is budgeted
    pub fn displayed_percent(&self) -> i64 {
        self.current_spend.percent_of(self.budget_amount)
    }

    /// Over as far as the user can see: the rounded percent reads 100 or more
    pub fn is_displayed_over(&self) -> bool {
        self.is_over_budget() || self.displayed_percent() >= 100
    }

    /// Within the final 15% of the budget but not yet exhausted
    pub fn is_warning(&self) -> bool {
        let ratio = self.spend_ratio();
        (WARNING_RATIO..OVER_RATIO).contains(&ratio)
    }

    pub fn over_amount(&self) -> Money {
        self.current_spend.saturating_remaining(self.budget_amount)
    }

    pub fn remaining_amount(&self) -> Money {
        self.budget_amount.saturating_remaining(self.current_spend)
    }
}

/// Snapshot of a budget's progress through a period
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetProgress {
    pub budget: Budget,
    pub period: BudgetPeriod,
    pub current_spend: Money,
    pub days_elapsed: u32,
    pub days_in_month: u32,
    pub categories: Vec<CategoryBudgetProgress>,
}

impl BudgetProgress {
    pub fn monthly_amount(&self) -> Money {
        self.budget.monthly_amount
    }

    /// `current_spend / monthly_amount`, 0 for category-only budgets
    pub fn spend_ratio(&self) -> f64 {
        self.current_spend.ratio_of(self.monthly_amount())
    }

    /// Fraction of the period elapsed
    pub fn expected_spend_ratio(&self) -> f64 {
        if self.days_in_month == 0 {
            0.0
        } else {
            self.days_elapsed as f64 / self.days_in_month as f64
        }
    }

    pub fn pace_status(&self) -> PaceStatus {
        PaceStatus::classify(self.spend_ratio(), self.expected_spend_ratio())
    }

    pub fn remaining_budget(&self) -> Money {
        self.monthly_amount().saturating_remaining(self.current_spend)
    }

    pub fn days_remaining(&self) -> u32 {
        self.days_in_month.saturating_sub(self.days_elapsed)
    }

    /// What can still be spent per remaining day
    pub fn daily_budget_remaining(&self) -> Money {
        match self.days_remaining() {
            0 => Money::zero(),
            days => self.remaining_budget().scale(1, days as i64),
        }
    }

    /// Linear extrapolation of the average daily rate across the whole period
    pub fn projected_end_of_month(&self) -> Money {
        if self.days_elapsed == 0 {
            self.current_spend
        } else {
            self.current_spend
                .scale(self.days_in_month as i64, self.days_elapsed as i64)
        }
    }

    /// Positive when the projection exceeds the monthly amount
    pub fn projected_over_under(&self) -> Money {
        self.projected_end_of_month() - self.monthly_amount()
    }

    pub fn category(&self, key: &CategoryKey) -> Option<&CategoryBudgetProgress> {
        self.categories.iter().find(|c| &c.category == key)
    }

    pub fn over_budget_categories(&self) -> impl Iterator<Item = &CategoryBudgetProgress> {
        self.categories.iter().filter(|c| c.is_displayed_over())
    }

    pub fn warning_categories(&self) -> impl Iterator<Item = &CategoryBudgetProgress> {
        self.categories
            .iter()
            .filter(|c| c.is_warning() && !c.is_displayed_over())
    }
}
