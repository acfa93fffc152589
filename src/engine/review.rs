//! Category review ordering
//!
//! Orders category progress rows for review screens. Pure presentation on top
//! of `CategoryBudgetProgress`; nothing is recomputed.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::models::{CategoryBudgetProgress, CategoryRegistry, Money};

/// Supported review orders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewOrder {
    /// Highest spend ratio first, then highest spend
    #[default]
    WorstFirst,
    /// Inverse of worst-first
    BestFirst,
    /// Highest absolute spend first
    HighestSpend,
    /// By display name
    Alphabetical,
    /// By registry group, groups with the most spend first
    Grouped,
}

impl FromStr for ReviewOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "worst" | "worst-first" => Ok(Self::WorstFirst),
            "best" | "best-first" => Ok(Self::BestFirst),
            "spend" | "highest-spend" => Ok(Self::HighestSpend),
            "alpha" | "alphabetical" => Ok(Self::Alphabetical),
            "group" | "grouped" => Ok(Self::Grouped),
            other => Err(format!("Unknown review order: {}", other)),
        }
    }
}

impl fmt::Display for ReviewOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::WorstFirst => "worst-first",
            Self::BestFirst => "best-first",
            Self::HighestSpend => "highest-spend",
            Self::Alphabetical => "alphabetical",
            Self::Grouped => "grouped",
        };
        f.write_str(name)
    }
}

/// A registry group with its member rows and totals
#[derive(Debug, Clone, PartialEq)]
pub struct GroupReview {
    pub group: String,
    pub total_spend: Money,
    pub total_budget: Money,
    pub categories: Vec<CategoryBudgetProgress>,
}

impl GroupReview {
    pub fn spend_ratio(&self) -> f64 {
        self.total_spend.ratio_of(self.total_budget)
    }
}

fn worst_first(a: &CategoryBudgetProgress, b: &CategoryBudgetProgress) -> Ordering {
    b.spend_ratio()
        .total_cmp(&a.spend_ratio())
        .then_with(|| b.current_spend.cmp(&a.current_spend))
        .then_with(|| a.category.cmp(&b.category))
}

/// Return the rows sorted by `order`
///
/// `Grouped` yields rows in group order; use [`group_categories`] for the
/// group headers and totals.
pub fn sort_categories(
    categories: &[CategoryBudgetProgress],
    order: ReviewOrder,
    registry: &CategoryRegistry,
) -> Vec<CategoryBudgetProgress> {
    let mut rows = categories.to_vec();
    match order {
        ReviewOrder::WorstFirst => rows.sort_by(worst_first),
        ReviewOrder::BestFirst => rows.sort_by(|a, b| {
            a.spend_ratio()
                .total_cmp(&b.spend_ratio())
                .then_with(|| a.current_spend.cmp(&b.current_spend))
                .then_with(|| a.category.cmp(&b.category))
        }),
        ReviewOrder::HighestSpend => rows.sort_by(|a, b| {
            b.current_spend
                .cmp(&a.current_spend)
                .then_with(|| a.category.cmp(&b.category))
        }),
        ReviewOrder::Alphabetical => rows.sort_by_cached_key(|row| {
            (
                registry.display_name(&row.category).to_lowercase(),
                row.category.clone(),
            )
        }),
        ReviewOrder::Grouped => {
            rows = group_categories(categories, registry)
                .into_iter()
                .flat_map(|g| g.categories)
                .collect();
        }
    }
    rows
}

/// Group rows by registry group
///
/// Groups are ordered by total spend (highest first), ties by name; rows
/// within a group are worst-first.
pub fn group_categories(
    categories: &[CategoryBudgetProgress],
    registry: &CategoryRegistry,
) -> Vec<GroupReview> {
    let mut groups: Vec<GroupReview> = Vec::new();
    for row in categories {
        let name = registry.group_of(&row.category);
        let index = match groups.iter().position(|g| g.group == name) {
            Some(index) => index,
            None => {
                groups.push(GroupReview {
                    group: name.to_string(),
                    total_spend: Money::zero(),
                    total_budget: Money::zero(),
                    categories: Vec::new(),
                });
                groups.len() - 1
            }
        };
        let group = &mut groups[index];
        group.total_spend += row.current_spend;
        group.total_budget += row.budget_amount;
        group.categories.push(row.clone());
    }

    for group in &mut groups {
        group.categories.sort_by(worst_first);
    }
    groups.sort_by(|a, b| {
        b.total_spend
            .cmp(&a.total_spend)
            .then_with(|| a.group.cmp(&b.group))
    });
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RegistryCategory;

    fn registry() -> CategoryRegistry {
        CategoryRegistry::new([
            RegistryCategory::new("produce", "Produce", "Food"),
            RegistryCategory::new("meat", "Meat", "Food"),
            RegistryCategory::new("fuel", "Fuel", "Car"),
            RegistryCategory::new("arcade", "Zany Arcade", "Fun"),
        ])
    }

    fn row(key: &str, budget: i64, spend: i64) -> CategoryBudgetProgress {
        CategoryBudgetProgress::new(key, Money::from_units(budget), Money::from_units(spend))
    }

    fn rows() -> Vec<CategoryBudgetProgress> {
        vec![
            row("produce", 100, 50),
            row("meat", 200, 180),
            row("fuel", 100, 90),
            row("arcade", 50, 10),
        ]
    }

    fn keys(rows: &[CategoryBudgetProgress]) -> Vec<&str> {
        rows.iter().map(|r| r.category.as_str()).collect()
    }

    #[test]
    fn test_worst_first_tie_breaks_on_spend() {
        let sorted = sort_categories(&rows(), ReviewOrder::WorstFirst, &registry());
        // meat and fuel are both at 90%; meat has more spend
        assert_eq!(keys(&sorted), vec!["meat", "fuel", "produce", "arcade"]);
    }

    #[test]
    fn test_best_first() {
        let sorted = sort_categories(&rows(), ReviewOrder::BestFirst, &registry());
        assert_eq!(keys(&sorted), vec!["arcade", "produce", "fuel", "meat"]);
    }

    #[test]
    fn test_highest_spend() {
        let sorted = sort_categories(&rows(), ReviewOrder::HighestSpend, &registry());
        assert_eq!(keys(&sorted), vec!["meat", "fuel", "produce", "arcade"]);
    }

    #[test]
    fn test_alphabetical_uses_display_name() {
        let sorted = sort_categories(&rows(), ReviewOrder::Alphabetical, &registry());
        assert_eq!(keys(&sorted), vec!["fuel", "meat", "produce", "arcade"]);
    }

    #[test]
    fn test_grouped_totals_and_order() {
        let groups = group_categories(&rows(), &registry());
        let names: Vec<&str> = groups.iter().map(|g| g.group.as_str()).collect();
        assert_eq!(names, vec!["Food", "Car", "Fun"]);

        let food = &groups[0];
        assert_eq!(food.total_spend, Money::from_units(230));
        assert_eq!(food.total_budget, Money::from_units(300));
        assert_eq!(keys(&food.categories), vec!["meat", "produce"]);

        let flat = sort_categories(&rows(), ReviewOrder::Grouped, &registry());
        assert_eq!(keys(&flat), vec!["meat", "produce", "fuel", "arcade"]);
    }

    #[test]
    fn test_parse_order() {
        assert_eq!("worst".parse::<ReviewOrder>().unwrap(), ReviewOrder::WorstFirst);
        assert_eq!("group".parse::<ReviewOrder>().unwrap(), ReviewOrder::Grouped);
        assert!("random".parse::<ReviewOrder>().is_err());
    }
}
