//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod budget;
pub mod category;
pub mod edit;
pub mod progress;
pub mod spend;

pub use budget::{handle_budget_command, BudgetCommands};
pub use category::handle_categories_command;
pub use edit::{handle_edit_command, EditArgs};
pub use progress::{handle_progress_command, handle_review_command, PeriodArgs, ReviewArgs};
pub use spend::{handle_spend_command, SpendCommands};

use chrono::NaiveDate;

use crate::error::PaceResult;
use crate::models::{BudgetPeriod, Money};

/// Parse a period argument, defaulting to the month containing `today`
pub fn parse_period(input: Option<&str>, today: NaiveDate) -> PaceResult<BudgetPeriod> {
    match input {
        Some(s) => Ok(BudgetPeriod::parse_relative(s, today)?),
        None => Ok(BudgetPeriod::containing(today)),
    }
}

/// Parse an amount argument
pub fn parse_amount(input: &str) -> PaceResult<Money> {
    Ok(Money::parse(input)?)
}
