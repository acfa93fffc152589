//! Budget display formatting

use crate::models::{Budget, CategoryRegistry};

/// Format the stored budget and its category allocations
pub fn format_budget_details(budget: &Budget, registry: &CategoryRegistry, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Budget: {}\n", budget.period));
    output.push_str(&format!("  ID:         {}\n", budget.id));
    if budget.is_category_only() {
        output.push_str("  Monthly:    (category budgets only)\n");
    } else {
        output.push_str(&format!(
            "  Monthly:    {}\n",
            budget.monthly_amount.format_with_symbol(symbol)
        ));
    }
    output.push_str(&format!(
        "  Allocated:  {}\n",
        budget.allocated_total().format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "  Renews:     {}\n",
        if budget.auto_renew { "Yes" } else { "No" }
    ));
    if !budget.alert_thresholds.is_empty() {
        let thresholds: Vec<String> = budget
            .alert_thresholds
            .iter()
            .map(|t| format!("{}%", (t * 100.0).round() as i64))
            .collect();
        output.push_str(&format!("  Alerts:     {}\n", thresholds.join(", ")));
    }

    if budget.category_allocations.is_empty() {
        return output;
    }

    output.push_str("\n  Categories:\n");
    for allocation in &budget.category_allocations {
        let note = if allocation.is_explicitly_zeroed() {
            " (removed)"
        } else if allocation.locked {
            " (locked)"
        } else {
            ""
        };
        output.push_str(&format!(
            "    {:<20} {:>10}{}\n",
            registry.display_name(&allocation.category),
            allocation.amount.format_with_symbol(symbol),
            note
        ));
    }

    output
}
