//! Spend CLI commands
//!
//! Records, lists, and removes the purchases that feed budget progress.

use chrono::{Local, NaiveDate};
use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::format_spend_list;
use crate::error::{PaceError, PaceResult};
use crate::services::BudgetService;
use crate::storage::Storage;

use super::{parse_amount, parse_period};

/// Spend subcommands
#[derive(Subcommand)]
pub enum SpendCommands {
    /// Record a purchase
    Add {
        /// Category key or name
        category: String,
        /// Amount (e.g., "12.50")
        amount: String,
        /// Purchase date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
        /// Memo
        #[arg(short, long)]
        memo: Option<String>,
    },

    /// List purchases in a period
    List {
        /// Budget period
        #[arg(short, long)]
        period: Option<String>,
    },

    /// Remove a purchase by ID
    Remove {
        /// Spend ID or unique prefix (e.g., "spd-1a2b")
        id: String,
    },
}

/// Handle a spend command
pub fn handle_spend_command(
    storage: &Storage,
    settings: &Settings,
    cmd: SpendCommands,
) -> PaceResult<()> {
    let service = BudgetService::new(storage, settings);
    let today = Local::now().date_naive();
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        SpendCommands::Add {
            category,
            amount,
            date,
            memo,
        } => {
            let amount = parse_amount(&amount)?;
            let date = match date {
                Some(d) => parse_date(&d)?,
                None => today,
            };

            let entry = service.record_spend(date, &category, amount, memo)?;
            println!(
                "Recorded {} in '{}' on {} ({})",
                entry.amount.format_with_symbol(symbol),
                entry.category,
                entry.date,
                entry.id
            );
        }

        SpendCommands::List { period } => {
            let period = parse_period(period.as_deref(), today)?;
            let entries = service.spend_entries(&period)?;
            let registry = service.registry()?;

            println!("Spending for {}", period);
            println!();
            println!("{}", format_spend_list(&entries, &registry, symbol));
        }

        SpendCommands::Remove { id } => {
            let removed = service.remove_spend(&id)?;
            println!(
                "Removed {} from '{}' on {}",
                removed.amount.format_with_symbol(symbol),
                removed.category,
                removed.date
            );
        }
    }

    Ok(())
}

/// Parse a YYYY-MM-DD date
pub fn parse_date(input: &str) -> PaceResult<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map_err(|e| PaceError::Validation(format!("Invalid date '{}': {}", input, e)))
}
