//! Service layer for budget-pace
//!
//! Composes the storage collaborators with the pure engine: loading spend,
//! building progress, running edit sessions, and persisting results.

pub mod budget;
pub mod screen;

pub use budget::BudgetService;
pub use screen::ScreenState;
