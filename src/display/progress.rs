//! Progress display formatting
//!
//! Renders a `BudgetProgress` snapshot: the headline pace figures followed by
//! one row per category allocation.

use crate::models::{BudgetProgress, CategoryBudgetProgress, CategoryRegistry, Money, PaceStatus};

/// Status marker shown next to a category row
fn category_marker(row: &CategoryBudgetProgress) -> &'static str {
    if row.is_displayed_over() {
        "OVER"
    } else if row.is_warning() {
        "!"
    } else {
        ""
    }
}

fn pace_hint(status: PaceStatus) -> &'static str {
    match status {
        PaceStatus::Ahead => "spending slower than the month is passing",
        PaceStatus::OnTrack => "spending in step with the month",
        PaceStatus::Behind => "spending faster than the month is passing",
        PaceStatus::Over => "the monthly amount is used up",
    }
}

/// Format the full progress view
pub fn format_progress(progress: &BudgetProgress, registry: &CategoryRegistry, symbol: &str) -> String {
    let money = |m: Money| m.format_with_symbol(symbol);
    let mut output = String::new();

    output.push_str(&format!("Budget Progress: {}\n", progress.period));
    output.push_str(&format!("{}\n", "=".repeat(60)));

    if progress.budget.is_category_only() {
        output.push_str(&format!(
            "Spent:      {} (category budgets only)\n",
            money(progress.current_spend)
        ));
    } else {
        let status = progress.pace_status();
        output.push_str(&format!(
            "Spent:      {} of {} ({}%)\n",
            money(progress.current_spend),
            money(progress.monthly_amount()),
            progress.current_spend.percent_of(progress.monthly_amount())
        ));
        output.push_str(&format!(
            "Day:        {} of {} ({}% of the month)\n",
            progress.days_elapsed,
            progress.days_in_month,
            (progress.expected_spend_ratio() * 100.0).round() as i64
        ));
        output.push_str(&format!("Pace:       {} - {}\n", status, pace_hint(status)));
        output.push_str(&format!(
            "Remaining:  {} ({} per day for {} days)\n",
            money(progress.remaining_budget()),
            money(progress.daily_budget_remaining()),
            progress.days_remaining()
        ));

        let over_under = progress.projected_over_under();
        let verdict = if over_under.is_positive() {
            format!("{} over", money(over_under))
        } else {
            format!("{} under", money(over_under.abs()))
        };
        output.push_str(&format!(
            "Projected:  {} by month end ({})\n",
            money(progress.projected_end_of_month()),
            verdict
        ));
    }

    if progress.categories.is_empty() {
        output.push_str("\nNo category budgets set.\n");
        return output;
    }

    output.push('\n');
    output.push_str(&format_category_rows(&progress.categories, registry, symbol));
    output
}

/// Format category rows as a table
pub fn format_category_rows(
    rows: &[CategoryBudgetProgress],
    registry: &CategoryRegistry,
    symbol: &str,
) -> String {
    let name_width = rows
        .iter()
        .map(|r| registry.display_name(&r.category).len())
        .max()
        .unwrap_or(8)
        .max(8);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<width$}  {:>10}  {:>10}  {:>5}\n",
        "Category",
        "Budget",
        "Spent",
        "%",
        width = name_width
    ));
    output.push_str(&format!(
        "{:-<width$}  {:->10}  {:->10}  {:->5}\n",
        "",
        "",
        "",
        "",
        width = name_width
    ));

    for row in rows {
        let name = registry.display_name(&row.category);
        let lock = if row.locked { " *" } else { "" };
        output.push_str(&format!(
            "{:<width$}  {:>10}  {:>10}  {:>4}%  {}{}\n",
            name,
            row.budget_amount.format_with_symbol(symbol),
            row.current_spend.format_with_symbol(symbol),
            row.displayed_percent(),
            category_marker(row),
            lock,
            width = name_width
        ));
    }

    output
}
