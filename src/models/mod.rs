//! Core data models for budget-pace
//!
//! Budgets, their category allocations, spend figures, and the read-only
//! progress views derived from them.

pub mod budget;
pub mod category;
pub mod ids;
pub mod money;
pub mod period;
pub mod progress;
pub mod spend;

pub use budget::{Budget, BudgetValidationError, CategoryAllocation};
pub use category::{CategoryKey, CategoryRegistry, RegistryCategory};
pub use ids::{BudgetId, SpendId};
pub use money::{Money, MoneyParseError};
pub use period::{BudgetPeriod, PeriodParseError};
pub use progress::{BudgetProgress, CategoryBudgetProgress, PaceStatus};
pub use spend::{CategorySpend, PeriodSpend, SpendEntry};
