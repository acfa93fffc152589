//! Budget repository for JSON storage
//!
//! budget.json holds at most one budget per period. The budget in force for
//! a month is the one set for it, or else the latest earlier budget when
//! that one renews.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::PaceResult;
use crate::models::{Budget, BudgetPeriod};

use super::json_file::JsonFile;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct BudgetData {
    #[serde(default)]
    budgets: Vec<Budget>,
}

impl BudgetData {
    fn index_of(&self, period: &BudgetPeriod) -> Option<usize> {
        self.budgets.iter().position(|b| b.period == *period)
    }
}

/// Repository for budget persistence
pub struct BudgetRepository {
    file: JsonFile<BudgetData>,
}

impl BudgetRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            file: JsonFile::new(path),
        }
    }

    pub fn load(&self) -> PaceResult<()> {
        self.file.load()
    }

    /// The budget in force for `period`
    pub fn in_force(&self, period: &BudgetPeriod) -> PaceResult<Option<Budget>> {
        self.file.read(|d| {
            d.budgets
                .iter()
                .filter(|b| b.period <= *period)
                .max_by_key(|b| b.period)
                .filter(|latest| latest.applies_to(period))
                .cloned()
        })
    }

    /// Every stored budget, earliest period first
    pub fn all(&self) -> PaceResult<Vec<Budget>> {
        let mut budgets = self.file.read(|d| d.budgets.clone())?;
        budgets.sort_by_key(|b| b.period);
        Ok(budgets)
    }

    /// Store `budget` under its period, replacing any budget already there
    pub fn upsert(&self, budget: Budget) -> PaceResult<()> {
        self.file.update(|d| {
            match d.index_of(&budget.period) {
                Some(i) => d.budgets[i] = budget,
                None => {
                    d.budgets.push(budget);
                    d.budgets.sort_by_key(|b| b.period);
                }
            }
            Ok(())
        })
    }

    /// Remove the budget set for exactly `period`
    pub fn remove(&self, period: &BudgetPeriod) -> PaceResult<Option<Budget>> {
        if self.file.read(|d| d.index_of(period).is_none())? {
            return Ok(None);
        }
        self.file
            .update(|d| Ok(d.index_of(period).map(|i| d.budgets.remove(i))))
    }
}
