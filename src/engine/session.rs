//! Interactive edit session
//!
//! Wraps the allocation engine as a reducer: a session holds the ordered
//! working set and its target, and each `AllocationAction` produces the next
//! session. Ordering is decided once when the session starts so rows do not
//! jump around while the user types.

use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::collections::HashSet;

use super::allocation::{self, Balance, EditableAllocation};
use crate::models::{Budget, CategoryAllocation, CategoryKey, CategoryRegistry, Money};

/// An edit applied to the working set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum AllocationAction {
    SetAmount { index: usize, amount: Money },
    Remove { index: usize },
    Reset { index: usize },
    ResetAll,
    /// Change the target total and redistribute the unlocked categories
    SetTotal { amount: Money },
}

/// The working state of one editing session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditSession {
    allocations: Vec<EditableAllocation>,
    target_total: Money,
}

impl EditSession {
    /// Start a session from the persisted budget (if any), padded with every
    /// registry category
    ///
    /// The target is the budget's monthly amount, or the allocation sum for
    /// category-only budgets.
    pub fn start(budget: Option<&Budget>, registry: &CategoryRegistry) -> Self {
        let persisted = budget
            .map(|b| b.category_allocations.as_slice())
            .unwrap_or_default();
        let allocations = seed_allocations(persisted, registry);

        let target_total = match budget {
            Some(b) if !b.is_category_only() => b.monthly_amount,
            _ => allocations.iter().map(|a| a.original_amount).sum(),
        };

        Self {
            allocations,
            target_total,
        }
    }

    /// Build a session directly from a working set, keeping its order
    pub fn from_parts(allocations: Vec<EditableAllocation>, target_total: Money) -> Self {
        Self {
            allocations,
            target_total: target_total.non_negative(),
        }
    }

    pub fn allocations(&self) -> &[EditableAllocation] {
        &self.allocations
    }

    pub fn target_total(&self) -> Money {
        self.target_total
    }

    pub fn index_of(&self, category: &CategoryKey) -> Option<usize> {
        self.allocations.iter().position(|a| &a.category == category)
    }

    pub fn balance(&self) -> Balance {
        allocation::balance(&self.allocations, self.target_total)
    }

    /// Whether anything differs from the session start
    pub fn has_edits(&self) -> bool {
        self.allocations.iter().any(|a| a.is_edited())
    }

    /// Apply one action, returning the next session
    pub fn apply(&self, action: &AllocationAction) -> Self {
        let target = self.target_total;
        let (allocations, target_total) = match *action {
            AllocationAction::SetAmount { index, amount } => (
                allocation::set_amount(&self.allocations, index, amount, target),
                target,
            ),
            AllocationAction::Remove { index } => {
                (allocation::remove(&self.allocations, index, target), target)
            }
            AllocationAction::Reset { index } => {
                (allocation::reset(&self.allocations, index, target), target)
            }
            AllocationAction::ResetAll => (allocation::reset_all(&self.allocations), target),
            AllocationAction::SetTotal { amount } => {
                let amount = amount.non_negative();
                (allocation::redistribute(&self.allocations, amount), amount)
            }
        };
        Self {
            allocations,
            target_total,
        }
    }

    /// Apply a sequence of actions in order
    pub fn apply_all<'a>(&self, actions: impl IntoIterator<Item = &'a AllocationAction>) -> Self {
        actions
            .into_iter()
            .fold(self.clone(), |session, action| session.apply(action))
    }

    /// Convert the working set back into allocations to persist
    ///
    /// Positive rows are kept along with locked zero rows (explicit removals);
    /// rows that were never budgeted are dropped.
    pub fn finish(&self) -> Vec<CategoryAllocation> {
        self.allocations
            .iter()
            .filter(|a| a.amount.is_positive() || a.locked)
            .map(EditableAllocation::to_allocation)
            .collect()
    }
}

/// Build the ordered working set for a new session
///
/// Rows with a positive starting amount come first, largest first; zero rows
/// follow in registry order. Registry categories missing from the budget are
/// added as unlocked zero rows.
pub fn seed_allocations(
    persisted: &[CategoryAllocation],
    registry: &CategoryRegistry,
) -> Vec<EditableAllocation> {
    let mut seen: HashSet<CategoryKey> = HashSet::new();
    let mut working: Vec<EditableAllocation> = persisted
        .iter()
        .filter(|a| seen.insert(a.category.clone()))
        .map(EditableAllocation::from_allocation)
        .collect();

    working.extend(
        registry
            .keys()
            .filter(|key| !seen.contains(*key))
            .map(|key| EditableAllocation::new(key.clone(), Money::zero())),
    );

    working.sort_by_key(|a| {
        let funded = a.original_amount.is_positive();
        (
            !funded,
            Reverse(a.original_amount),
            registry.position(&a.category),
            a.category.clone(),
        )
    });
    working
}
