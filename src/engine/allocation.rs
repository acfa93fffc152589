//! Allocation engine
//!
//! Keeps a working set of category allocations summing to a target total.
//! Every edit locks the edited category and hands the remainder to the
//! unlocked categories in proportion to what each started the session with.
//!
//! All functions are total: they take a slice and return a new `Vec`, never
//! fail, and never produce a negative amount.

use serde::{Deserialize, Serialize};
use std::cmp::Reverse;

use crate::models::money::HALF_UNIT;
use crate::models::{CategoryAllocation, CategoryKey, Money};

/// A category allocation while it is being edited
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditableAllocation {
    pub category: CategoryKey,
    pub amount: Money,

    /// Amount at the start of the session; redistribution weight and reset target
    pub original_amount: Money,

    pub locked: bool,
}

impl EditableAllocation {
    pub fn new(category: impl Into<CategoryKey>, amount: Money) -> Self {
        let amount = amount.non_negative();
        Self {
            category: category.into(),
            amount,
            original_amount: amount,
            locked: false,
        }
    }

    pub fn from_allocation(allocation: &CategoryAllocation) -> Self {
        Self {
            locked: allocation.locked,
            ..Self::new(allocation.category.clone(), allocation.amount)
        }
    }

    /// Changed by more than half a unit, or pinned by the user
    pub fn is_edited(&self) -> bool {
        (self.amount - self.original_amount).abs() > HALF_UNIT || self.locked
    }

    pub fn to_allocation(&self) -> CategoryAllocation {
        CategoryAllocation {
            category: self.category.clone(),
            amount: self.amount,
            locked: self.locked,
        }
    }
}

/// How far the working set is from its target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Balance {
    pub total_saved: Money,

    /// `total_saved - target`; positive means over-allocated
    pub difference: Money,

    pub balanced: bool,
}

/// Sum the working set and compare it with `target_total`
pub fn balance(allocations: &[EditableAllocation], target_total: Money) -> Balance {
    let total_saved: Money = allocations.iter().map(|a| a.amount).sum();
    let difference = total_saved - target_total;
    Balance {
        total_saved,
        difference,
        balanced: difference.abs() < HALF_UNIT,
    }
}

/// Set one category's amount, lock it, and redistribute the rest
pub fn set_amount(
    allocations: &[EditableAllocation],
    index: usize,
    new_amount: Money,
    target_total: Money,
) -> Vec<EditableAllocation> {
    let mut next = allocations.to_vec();
    let Some(entry) = next.get_mut(index) else {
        return next;
    };
    entry.amount = new_amount.non_negative();
    entry.locked = true;
    redistribute_excluding(&next, target_total, None)
}

/// Zero a category and lock it so it stays distinguishable from "never budgeted"
pub fn remove(
    allocations: &[EditableAllocation],
    index: usize,
    target_total: Money,
) -> Vec<EditableAllocation> {
    set_amount(allocations, index, Money::zero(), target_total)
}

/// Restore one category to its original amount and unlock it
///
/// The restored category keeps its original amount during this pass; only the
/// other unlocked categories absorb the change.
pub fn reset(
    allocations: &[EditableAllocation],
    index: usize,
    target_total: Money,
) -> Vec<EditableAllocation> {
    let mut next = allocations.to_vec();
    let Some(entry) = next.get_mut(index) else {
        return next;
    };
    entry.amount = entry.original_amount;
    entry.locked = false;
    redistribute_excluding(&next, target_total, Some(index))
}

/// Restore every category and clear every lock, without redistributing
pub fn reset_all(allocations: &[EditableAllocation]) -> Vec<EditableAllocation> {
    allocations
        .iter()
        .map(|a| EditableAllocation {
            amount: a.original_amount,
            locked: false,
            ..a.clone()
        })
        .collect()
}

/// Spread `target_total` minus the locked total over the unlocked categories
///
/// Shares follow each unlocked category's original amount. The working set is
/// returned unchanged when nothing is unlocked, when locks already use up the
/// target, or when every unlocked category started at zero.
pub fn redistribute(
    allocations: &[EditableAllocation],
    target_total: Money,
) -> Vec<EditableAllocation> {
    redistribute_excluding(allocations, target_total, None)
}

fn redistribute_excluding(
    allocations: &[EditableAllocation],
    target_total: Money,
    pinned: Option<usize>,
) -> Vec<EditableAllocation> {
    let mut next = allocations.to_vec();
    let is_fixed = |i: usize, a: &EditableAllocation| a.locked || Some(i) == pinned;

    let fixed_total: Money = next
        .iter()
        .enumerate()
        .filter(|(i, a)| is_fixed(*i, a))
        .map(|(_, a)| a.amount)
        .sum();
    let remaining = target_total - fixed_total;

    let unlocked: Vec<usize> = next
        .iter()
        .enumerate()
        .filter(|(i, a)| !is_fixed(*i, a))
        .map(|(i, _)| i)
        .collect();

    if unlocked.is_empty() || !remaining.is_positive() {
        return next;
    }

    let weights: Vec<i128> = unlocked
        .iter()
        .map(|&i| next[i].original_amount.non_negative().cents() as i128)
        .collect();
    let weight_sum: i128 = weights.iter().sum();
    if weight_sum == 0 {
        return next;
    }

    let pool = remaining.cents() as i128;
    let mut shares: Vec<i128> = weights.iter().map(|w| pool * w / weight_sum).collect();

    // Hand the cents lost to flooring to the largest fractional remainders,
    // tie-breaking on category key so input order does not matter.
    let leftover = pool - shares.iter().sum::<i128>();
    let mut by_remainder: Vec<usize> = (0..unlocked.len()).collect();
    by_remainder.sort_by_key(|&k| {
        (
            Reverse(pool * weights[k] % weight_sum),
            next[unlocked[k]].category.clone(),
        )
    });
    for &k in by_remainder.iter().take(leftover as usize) {
        shares[k] += 1;
    }

    for (k, &i) in unlocked.iter().enumerate() {
        next[i].amount = Money::from_cents(shares[k] as i64).non_negative();
    }
    next
}
