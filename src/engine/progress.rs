//! Progress calculator
//!
//! Combines a budget with the store's spend figures into a `BudgetProgress`
//! snapshot. Missing spend data counts as zero spend.

use std::collections::HashMap;

use crate::models::{
    Budget, BudgetPeriod, BudgetProgress, CategoryBudgetProgress, CategoryKey, CategorySpend,
    Money, PeriodSpend,
};

/// Build the progress snapshot for `budget` in `period`
///
/// One `CategoryBudgetProgress` is produced per allocation, in allocation
/// order. Spend reported for the same category more than once is summed.
pub fn calculate_progress(
    budget: &Budget,
    period: BudgetPeriod,
    period_spend: &PeriodSpend,
    category_spend: &[CategorySpend],
) -> BudgetProgress {
    let spend_by_category = spend_map(category_spend);

    let categories = budget
        .category_allocations
        .iter()
        .map(|allocation| CategoryBudgetProgress {
            category: allocation.category.clone(),
            budget_amount: allocation.amount,
            current_spend: spend_by_category
                .get(&allocation.category)
                .copied()
                .unwrap_or_default(),
            locked: allocation.locked,
        })
        .collect();

    BudgetProgress {
        budget: budget.clone(),
        period,
        current_spend: period_spend.total_spend.non_negative(),
        days_elapsed: period_spend.days_elapsed.min(period_spend.days_in_month),
        days_in_month: period_spend.days_in_month,
        categories,
    }
}

fn spend_map(category_spend: &[CategorySpend]) -> HashMap<&CategoryKey, Money> {
    let mut map: HashMap<&CategoryKey, Money> = HashMap::new();
    for entry in category_spend {
        *map.entry(&entry.category).or_default() += entry.spend;
    }
    map
}
