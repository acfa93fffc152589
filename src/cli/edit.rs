//! Allocation editor command
//!
//! Replays a list of edits against a fresh edit session, prints the resulting
//! working set, and saves it unless `--dry-run` is given.
//!
//! Edit syntax:
//!
//! - `groceries=400` sets a category and locks it
//! - `remove:dining` zeroes a category and locks it
//! - `reset:dining` restores a category's starting amount
//! - `reset-all` restores every category and clears all locks
//! - `total=2500` changes the target total

use chrono::Local;
use clap::Args;

use crate::config::settings::Settings;
use crate::display::format_session;
use crate::engine::{AllocationAction, EditSession};
use crate::error::{PaceError, PaceResult};
use crate::models::{CategoryKey, CategoryRegistry};
use crate::services::BudgetService;
use crate::storage::Storage;

use super::{parse_amount, parse_period};

/// Arguments for `pace edit`
#[derive(Args)]
pub struct EditArgs {
    /// Edits to apply in order (e.g., "groceries=400", "remove:dining",
    /// "reset:dining", "reset-all", "total=2500")
    pub actions: Vec<String>,

    /// Budget period
    #[arg(short, long)]
    pub period: Option<String>,

    /// Show the result without saving
    #[arg(long)]
    pub dry_run: bool,
}

/// Handle `pace edit`
pub fn handle_edit_command(storage: &Storage, settings: &Settings, args: EditArgs) -> PaceResult<()> {
    let service = BudgetService::new(storage, settings);
    let today = Local::now().date_naive();
    let period = parse_period(args.period.as_deref(), today)?;
    let registry = service.registry()?;

    let mut session = service.begin_edit(&period)?;
    for input in &args.actions {
        let action = parse_action(input, &session, &registry)?;
        session = session.apply(&action);
    }

    println!("Allocations for {}", period);
    println!();
    print!(
        "{}",
        format_session(&session, &registry, &settings.currency_symbol)
    );

    if args.actions.is_empty() {
        return Ok(());
    }

    if args.dry_run {
        println!("\nDry run, nothing saved.");
        return Ok(());
    }

    let budget = service.save_session(&period, &session)?;
    println!(
        "\nSaved {} category allocations.",
        budget.category_allocations.len()
    );
    Ok(())
}

/// Translate one edit into an action against the session's working set
pub fn parse_action(
    input: &str,
    session: &EditSession,
    registry: &CategoryRegistry,
) -> PaceResult<AllocationAction> {
    let input = input.trim();

    if input.eq_ignore_ascii_case("reset-all") {
        return Ok(AllocationAction::ResetAll);
    }
    if let Some(category) = input.strip_prefix("remove:") {
        let index = locate(category, session, registry)?;
        return Ok(AllocationAction::Remove { index });
    }
    if let Some(category) = input.strip_prefix("reset:") {
        let index = locate(category, session, registry)?;
        return Ok(AllocationAction::Reset { index });
    }

    let (target, amount) = input.split_once('=').ok_or_else(|| {
        PaceError::Validation(format!(
            "Unrecognized edit '{}'. Use category=amount, remove:category, reset:category, reset-all, or total=amount",
            input
        ))
    })?;
    let amount = parse_amount(amount)?;
    if amount.is_negative() {
        return Err(PaceError::Validation(format!(
            "Amount for '{}' cannot be negative",
            target.trim()
        )));
    }

    if target.trim().eq_ignore_ascii_case("total") {
        return Ok(AllocationAction::SetTotal { amount });
    }
    let index = locate(target, session, registry)?;
    Ok(AllocationAction::SetAmount { index, amount })
}

fn locate(input: &str, session: &EditSession, registry: &CategoryRegistry) -> PaceResult<usize> {
    let key = registry
        .resolve(input)
        .map(|c| c.key.clone())
        .unwrap_or_else(|| CategoryKey::new(input));
    session
        .index_of(&key)
        .ok_or_else(|| PaceError::category_not_found(input.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::EditableAllocation;
    use crate::models::{Money, RegistryCategory};

    fn fixture() -> (EditSession, CategoryRegistry) {
        let registry = CategoryRegistry::new([
            RegistryCategory::new("produce", "Produce", "Food"),
            RegistryCategory::new("dining", "Dining Out", "Fun"),
        ]);
        let session = EditSession::from_parts(
            vec![
                EditableAllocation::new("produce", Money::from_units(200)),
                EditableAllocation::new("dining", Money::from_units(100)),
            ],
            Money::from_units(300),
        );
        (session, registry)
    }

    #[test]
    fn test_parse_set_amount_by_name() {
        let (session, registry) = fixture();
        let action = parse_action("Dining Out=50", &session, &registry).unwrap();
        assert_eq!(
            action,
            AllocationAction::SetAmount {
                index: 1,
                amount: Money::from_units(50)
            }
        );
    }

    #[test]
    fn test_parse_keywords() {
        let (session, registry) = fixture();
        assert_eq!(
            parse_action("remove:produce", &session, &registry).unwrap(),
            AllocationAction::Remove { index: 0 }
        );
        assert_eq!(
            parse_action("reset:dining", &session, &registry).unwrap(),
            AllocationAction::Reset { index: 1 }
        );
        assert_eq!(
            parse_action("reset-all", &session, &registry).unwrap(),
            AllocationAction::ResetAll
        );
        assert_eq!(
            parse_action("total=450.50", &session, &registry).unwrap(),
            AllocationAction::SetTotal {
                amount: Money::from_cents(45050)
            }
        );
    }

    #[test]
    fn test_parse_errors() {
        let (session, registry) = fixture();
        assert!(parse_action("yachts=5", &session, &registry)
            .unwrap_err()
            .is_not_found());
        assert!(parse_action("produce", &session, &registry)
            .unwrap_err()
            .is_validation());
        assert!(parse_action("produce=-5", &session, &registry)
            .unwrap_err()
            .is_validation());
    }
}
