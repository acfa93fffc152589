//! Category review display
//!
//! Lists category progress rows in a chosen review order; the grouped order
//! prints a header and totals per registry group.

use crate::engine::{group_categories, sort_categories, ReviewOrder};
use crate::models::{BudgetProgress, CategoryRegistry};

use super::progress::format_category_rows;

/// Format the review of every category row in `order`
pub fn format_review(
    progress: &BudgetProgress,
    order: ReviewOrder,
    registry: &CategoryRegistry,
    symbol: &str,
) -> String {
    let mut output = String::new();
    output.push_str(&format!("Category Review: {} ({})\n", progress.period, order));
    output.push_str(&format!("{}\n", "=".repeat(60)));

    if progress.categories.is_empty() {
        output.push_str("No category budgets set.\n");
        return output;
    }

    if order == ReviewOrder::Grouped {
        for group in group_categories(&progress.categories, registry) {
            output.push_str(&format!(
                "\n{}  {} of {} ({}%)\n",
                group.group,
                group.total_spend.format_with_symbol(symbol),
                group.total_budget.format_with_symbol(symbol),
                group.total_spend.percent_of(group.total_budget)
            ));
            output.push_str(&format_category_rows(&group.categories, registry, symbol));
        }
    } else {
        let rows = sort_categories(&progress.categories, order, registry);
        output.push_str(&format_category_rows(&rows, registry, symbol));
    }

    let over = progress.over_budget_categories().count();
    let warning = progress.warning_categories().count();
    if over > 0 || warning > 0 {
        output.push_str(&format!("\n{} over budget, {} close to the limit\n", over, warning));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Budget, BudgetPeriod, CategoryBudgetProgress, Money};

    fn progress() -> BudgetProgress {
        let period = BudgetPeriod::monthly(2025, 6);
        BudgetProgress {
            budget: Budget::new(period, Money::from_units(1000)),
            period,
            current_spend: Money::from_units(490),
            days_elapsed: 10,
            days_in_month: 30,
            categories: vec![
                CategoryBudgetProgress::new("groceries", Money::from_units(400), Money::from_units(100)),
                CategoryBudgetProgress::new("dining", Money::from_units(100), Money::from_units(90)),
                CategoryBudgetProgress::new("travel", Money::from_units(200), Money::from_units(300)),
            ],
        }
    }

    #[test]
    fn test_worst_first_review() {
        let registry = CategoryRegistry::default_registry();
        let output = format_review(&progress(), ReviewOrder::WorstFirst, &registry, "$");

        let travel = output.find("Travel").unwrap();
        let dining = output.find("Dining Out").unwrap();
        let groceries = output.find("Groceries").unwrap();
        assert!(travel < dining && dining < groceries);
        assert!(output.contains("1 over budget, 1 close to the limit"));
    }

    #[test]
    fn test_grouped_review_headers() {
        let registry = CategoryRegistry::default_registry();
        let output = format_review(&progress(), ReviewOrder::Grouped, &registry, "$");

        assert!(output.contains("Lifestyle  $390.00 of $300.00 (130%)"));
        assert!(output.contains("Essentials  $100.00 of $400.00 (25%)"));
    }
}
