//! Budget model
//!
//! A monthly spending target, optionally split across categories.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use super::category::CategoryKey;
use super::ids::BudgetId;
use super::money::Money;
use super::period::BudgetPeriod;

/// One category's slice of the monthly budget
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryAllocation {
    pub category: CategoryKey,
    pub amount: Money,

    /// Excluded from automatic redistribution. A locked zero row marks a
    /// category the user explicitly removed.
    #[serde(default)]
    pub locked: bool,
}

impl CategoryAllocation {
    pub fn new(category: impl Into<CategoryKey>, amount: Money) -> Self {
        Self {
            category: category.into(),
            amount,
            locked: false,
        }
    }

    pub fn locked(category: impl Into<CategoryKey>, amount: Money) -> Self {
        Self {
            locked: true,
            ..Self::new(category, amount)
        }
    }

    /// A removed category kept as an explicit zero
    pub fn is_explicitly_zeroed(&self) -> bool {
        self.locked && self.amount.is_zero()
    }
}

/// The persisted monthly budget
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Budget {
    pub id: BudgetId,

    /// Month the budget was set for
    pub period: BudgetPeriod,

    /// Total monthly target; zero when tracking only by category
    #[serde(default)]
    pub monthly_amount: Money,

    #[serde(default)]
    pub category_allocations: Vec<CategoryAllocation>,

    /// Whether the budget recurs unchanged into later months
    #[serde(default)]
    pub auto_renew: bool,

    /// Fractions of the budget at which an alert should fire
    #[serde(default)]
    pub alert_thresholds: Vec<f64>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Budget {
    pub fn new(period: BudgetPeriod, monthly_amount: Money) -> Self {
        let now = Utc::now();
        Self {
            id: BudgetId::new(),
            period,
            monthly_amount,
            category_allocations: Vec::new(),
            auto_renew: false,
            alert_thresholds: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_allocations(mut self, allocations: Vec<CategoryAllocation>) -> Self {
        self.category_allocations = allocations;
        self
    }

    /// A copy of this budget set for a later `period`
    ///
    /// Used when a renewed budget is changed for one month: the change gets
    /// its own record and the earlier month keeps its figures.
    pub fn renewed_for(&self, period: BudgetPeriod) -> Self {
        let now = Utc::now();
        Self {
            id: BudgetId::new(),
            period,
            created_at: now,
            updated_at: now,
            ..self.clone()
        }
    }

    /// Whether this budget is in force for `period`
    pub fn applies_to(&self, period: &BudgetPeriod) -> bool {
        *period == self.period || (self.auto_renew && *period > self.period)
    }

    pub fn is_category_only(&self) -> bool {
        self.monthly_amount.is_zero()
    }

    pub fn allocation(&self, category: &CategoryKey) -> Option<&CategoryAllocation> {
        self.category_allocations
            .iter()
            .find(|a| &a.category == category)
    }

    /// Sum of all category allocations
    pub fn allocated_total(&self) -> Money {
        self.category_allocations.iter().map(|a| a.amount).sum()
    }

    /// Replace the monthly target and allocations wholesale
    pub fn update(&mut self, monthly_amount: Money, allocations: Vec<CategoryAllocation>) {
        self.monthly_amount = monthly_amount;
        self.category_allocations = allocations;
        self.updated_at = Utc::now();
    }

    /// Upsert a single category's allocation
    pub fn set_category_amount(&mut self, category: CategoryKey, amount: Money, locked: bool) {
        match self
            .category_allocations
            .iter_mut()
            .find(|a| a.category == category)
        {
            Some(existing) => {
                existing.amount = amount;
                existing.locked = locked;
            }
            None => self.category_allocations.push(CategoryAllocation {
                category,
                amount,
                locked,
            }),
        }
        self.updated_at = Utc::now();
    }

    /// Validate the budget before it is persisted
    pub fn validate(&self) -> Result<(), BudgetValidationError> {
        if self.monthly_amount.is_negative() {
            return Err(BudgetValidationError::NegativeTotal);
        }

        let mut seen = HashSet::new();
        for allocation in &self.category_allocations {
            if allocation.amount.is_negative() {
                return Err(BudgetValidationError::NegativeAllocation(
                    allocation.category.clone(),
                ));
            }
            if !seen.insert(&allocation.category) {
                return Err(BudgetValidationError::DuplicateCategory(
                    allocation.category.clone(),
                ));
            }
        }

        if let Some(bad) = self
            .alert_thresholds
            .iter()
            .find(|t| !t.is_finite() || **t <= 0.0)
        {
            return Err(BudgetValidationError::InvalidThreshold(*bad));
        }

        Ok(())
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} budget: {} across {} categories",
            self.period,
            self.monthly_amount,
            self.category_allocations.len()
        )
    }
}

/// Validation errors for budgets
#[derive(Debug, Clone, PartialEq)]
pub enum BudgetValidationError {
    NegativeTotal,
    NegativeAllocation(CategoryKey),
    DuplicateCategory(CategoryKey),
    InvalidThreshold(f64),
}

impl fmt::Display for BudgetValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeTotal => write!(f, "Monthly amount cannot be negative"),
            Self::NegativeAllocation(key) => {
                write!(f, "Allocation for '{}' cannot be negative", key)
            }
            Self::DuplicateCategory(key) => {
                write!(f, "Category '{}' is allocated more than once", key)
            }
            Self::InvalidThreshold(t) => write!(f, "Alert threshold {} must be positive", t),
        }
    }
}

impl std::error::Error for BudgetValidationError {}
