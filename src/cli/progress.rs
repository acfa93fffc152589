//! Progress and review commands
//!
//! Both run one load cycle of the budget screen and print the settled state.

use chrono::Local;
use clap::Args;

use crate::config::settings::Settings;
use crate::display::{format_progress, format_review};
use crate::engine::ReviewOrder;
use crate::error::{PaceError, PaceResult};
use crate::models::{BudgetPeriod, BudgetProgress};
use crate::services::{BudgetService, ScreenState};
use crate::storage::Storage;

use super::parse_period;
use super::spend::parse_date;

/// Period selection shared by `progress` and `review`
#[derive(Args)]
pub struct PeriodArgs {
    /// Budget period (e.g., "2025-01", "current", "last")
    #[arg(short, long)]
    pub period: Option<String>,

    /// Evaluate as of this date (YYYY-MM-DD) instead of today
    #[arg(long)]
    pub today: Option<String>,
}

/// Arguments for `pace review`
#[derive(Args)]
pub struct ReviewArgs {
    #[command(flatten)]
    pub period: PeriodArgs,

    /// Row order: worst, best, spend, alpha, or group
    #[arg(short, long, default_value = "worst")]
    pub order: ReviewOrder,
}

/// Handle `pace progress`
pub fn handle_progress_command(
    storage: &Storage,
    settings: &Settings,
    args: PeriodArgs,
) -> PaceResult<()> {
    let (period, progress) = load(storage, settings, &args)?;
    let Some(progress) = progress else {
        print_no_budget(&period);
        return Ok(());
    };

    let registry = BudgetService::new(storage, settings).registry()?;
    print!(
        "{}",
        format_progress(&progress, &registry, &settings.currency_symbol)
    );
    Ok(())
}

/// Handle `pace review`
pub fn handle_review_command(
    storage: &Storage,
    settings: &Settings,
    args: ReviewArgs,
) -> PaceResult<()> {
    let (period, progress) = load(storage, settings, &args.period)?;
    let Some(progress) = progress else {
        print_no_budget(&period);
        return Ok(());
    };

    let registry = BudgetService::new(storage, settings).registry()?;
    print!(
        "{}",
        format_review(&progress, args.order, &registry, &settings.currency_symbol)
    );
    Ok(())
}

fn load(
    storage: &Storage,
    settings: &Settings,
    args: &PeriodArgs,
) -> PaceResult<(BudgetPeriod, Option<BudgetProgress>)> {
    let today = match &args.today {
        Some(d) => parse_date(d)?,
        None => Local::now().date_naive(),
    };
    let period = parse_period(args.period.as_deref(), today)?;

    let service = BudgetService::new(storage, settings);
    let mut state = ScreenState::default();
    service.refresh(&mut state, &period, today);

    match state {
        ScreenState::Active(progress) => Ok((period, Some(*progress))),
        ScreenState::NoBudget => Ok((period, None)),
        ScreenState::Error(message) => Err(PaceError::Load(message)),
        other => Err(PaceError::Load(format!(
            "budget screen did not settle: {}",
            other
        ))),
    }
}

fn print_no_budget(period: &BudgetPeriod) {
    println!("No budget set for {}.", period);
    println!("Run 'pace budget set <amount>' to create one.");
}
