//! Budget CLI commands
//!
//! Implements CLI commands for monthly budgets: listing and showing them,
//! setting the monthly amount, patching one category, and deleting one.

use chrono::Local;
use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::format_budget_details;
use crate::error::PaceResult;
use crate::services::BudgetService;
use crate::storage::Storage;

use super::{parse_amount, parse_period};

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Show the budget in force for a period
    Show {
        /// Budget period (e.g., "2025-01", "current", "last")
        #[arg(short, long)]
        period: Option<String>,
    },

    /// Set the monthly amount, creating the budget if needed
    Set {
        /// Monthly amount (e.g., "2500" or "2500.00"); 0 tracks categories only
        amount: String,
        /// Budget period
        #[arg(short, long)]
        period: Option<String>,
        /// Carry the budget into later months
        #[arg(long, conflicts_with = "no_renew")]
        renew: bool,
        /// Keep the budget to its own month
        #[arg(long)]
        no_renew: bool,
    },

    /// Set one category's allocation without redistributing
    Category {
        /// Category key or name
        category: String,
        /// Amount
        amount: String,
        /// Budget period
        #[arg(short, long)]
        period: Option<String>,
    },

    /// List every stored budget
    #[command(alias = "ls")]
    List,

    /// Delete the budget in force for a period
    Delete {
        /// Budget period
        #[arg(short, long)]
        period: Option<String>,
    },
}

/// Handle a budget command
pub fn handle_budget_command(
    storage: &Storage,
    settings: &Settings,
    cmd: BudgetCommands,
) -> PaceResult<()> {
    let service = BudgetService::new(storage, settings);
    let today = Local::now().date_naive();
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        BudgetCommands::Show { period } => {
            let period = parse_period(period.as_deref(), today)?;
            match service.budget_for(&period)? {
                Some(budget) => {
                    let registry = service.registry()?;
                    print!("{}", format_budget_details(&budget, &registry, symbol));
                }
                None => {
                    println!("No budget set for {}.", period);
                    println!("Run 'pace budget set <amount>' to create one.");
                }
            }
        }

        BudgetCommands::Set {
            amount,
            period,
            renew,
            no_renew,
        } => {
            let period = parse_period(period.as_deref(), today)?;
            let amount = parse_amount(&amount)?;
            let auto_renew = match (renew, no_renew) {
                (true, _) => Some(true),
                (_, true) => Some(false),
                _ => None,
            };

            let budget = service.set_budget(&period, amount, auto_renew)?;
            if budget.is_category_only() {
                println!("Budget for {} now tracks categories only", period);
            } else {
                println!(
                    "Budget for {} set to {}",
                    period,
                    budget.monthly_amount.format_with_symbol(symbol)
                );
            }

            let allocated = budget.allocated_total();
            if !budget.is_category_only() && allocated > budget.monthly_amount {
                println!(
                    "Warning: categories already allocate {}. Run 'pace edit' to rebalance.",
                    allocated.format_with_symbol(symbol)
                );
            }
        }

        BudgetCommands::Category {
            category,
            amount,
            period,
        } => {
            let period = parse_period(period.as_deref(), today)?;
            let amount = parse_amount(&amount)?;

            let budget = service.set_category(&period, &category, amount)?;
            let registry = service.registry()?;
            let name = registry
                .resolve(&category)
                .map(|c| c.name.clone())
                .unwrap_or(category);
            println!(
                "Set '{}' to {} for {}",
                name,
                amount.format_with_symbol(symbol),
                period
            );
            println!(
                "Allocated: {}",
                budget.allocated_total().format_with_symbol(symbol)
            );
        }

        BudgetCommands::List => {
            let budgets = service.budgets()?;
            if budgets.is_empty() {
                println!("No budgets set.");
            }
            for budget in budgets {
                let amount = if budget.is_category_only() {
                    "categories only".to_string()
                } else {
                    budget.monthly_amount.format_with_symbol(symbol)
                };
                let renews = if budget.auto_renew { "  (renews)" } else { "" };
                println!(
                    "{}  {:>14}  {} categories{}",
                    budget.period,
                    amount,
                    budget.category_allocations.len(),
                    renews
                );
            }
        }

        BudgetCommands::Delete { period } => {
            let period = parse_period(period.as_deref(), today)?;
            match service.delete_budget(&period)? {
                Some(deleted) if deleted.period == period => {
                    println!("Budget for {} deleted", period);
                }
                Some(deleted) => {
                    println!(
                        "Budget for {} deleted (it had renewed into {})",
                        deleted.period, period
                    );
                }
                None => println!("No budget to delete for {}.", period),
            }
        }
    }

    Ok(())
}
