//! Budget service
//!
//! The calling layer around the engine: loads the budget and spend figures
//! from the store, runs the progress calculator, drives edit sessions, and
//! persists the results.

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::config::Settings;
use crate::engine::{calculate_progress, EditSession};
use crate::error::{PaceError, PaceResult};
use crate::models::{
    Budget, BudgetPeriod, BudgetProgress, CategoryKey, CategoryRegistry, Money, SpendEntry,
};
use crate::services::ScreenState;
use crate::storage::{BudgetStore, CategorySource};

/// Service for budget management
pub struct BudgetService<'a, S> {
    store: &'a S,
    settings: &'a Settings,
}

impl<'a, S> BudgetService<'a, S>
where
    S: BudgetStore + CategorySource,
{
    pub fn new(store: &'a S, settings: &'a Settings) -> Self {
        Self { store, settings }
    }

    pub fn registry(&self) -> PaceResult<CategoryRegistry> {
        self.store.registry()
    }

    /// The budget in force for `period`, if any
    pub fn budget_for(&self, period: &BudgetPeriod) -> PaceResult<Option<Budget>> {
        self.store.load_budget(period)
    }

    /// Every stored budget, earliest period first
    pub fn budgets(&self) -> PaceResult<Vec<Budget>> {
        self.store.budgets()
    }

    /// The budget to change when editing `period`
    ///
    /// A budget renewed from an earlier month is copied into `period`, so
    /// the edit does not reach back into the months before it.
    fn budget_to_edit(&self, period: &BudgetPeriod) -> PaceResult<Option<Budget>> {
        Ok(self.budget_for(period)?.map(|budget| {
            if budget.period == *period {
                budget
            } else {
                debug!(from = %budget.period, to = %period, "copying renewed budget");
                budget.renewed_for(*period)
            }
        }))
    }

    /// Build the progress snapshot for `period` as of `today`
    ///
    /// Returns `None` when no budget applies to the period.
    pub fn load_progress(
        &self,
        period: &BudgetPeriod,
        today: NaiveDate,
    ) -> PaceResult<Option<BudgetProgress>> {
        let Some(budget) = self.budget_for(period)? else {
            debug!(%period, "no budget for period");
            return Ok(None);
        };

        let period_spend = self.store.period_spend(period, today)?;
        let category_spend = self.store.category_spend(period)?;
        debug!(
            %period,
            total = %period_spend.total_spend,
            categories = category_spend.len(),
            "loaded spend"
        );

        if !budget.is_category_only() && budget.allocated_total() > budget.monthly_amount {
            warn!(
                allocated = %budget.allocated_total(),
                monthly = %budget.monthly_amount,
                "category allocations exceed the monthly amount"
            );
        }

        Ok(Some(calculate_progress(
            &budget,
            *period,
            &period_spend,
            &category_spend,
        )))
    }

    /// Run one load cycle of the screen state machine
    pub fn refresh(&self, state: &mut ScreenState, period: &BudgetPeriod, today: NaiveDate) {
        if state.begin_refresh() {
            state.resolve(self.load_progress(period, today));
        }
    }

    /// Create the budget for `period`, or update the monthly amount of the
    /// one in force while keeping its allocations
    pub fn set_budget(
        &self,
        period: &BudgetPeriod,
        monthly_amount: Money,
        auto_renew: Option<bool>,
    ) -> PaceResult<Budget> {
        let mut budget = match self.budget_to_edit(period)? {
            Some(mut existing) => {
                let allocations = existing.category_allocations.clone();
                existing.update(monthly_amount, allocations);
                existing
            }
            None => {
                let mut budget = Budget::new(*period, monthly_amount);
                budget.auto_renew = self.settings.default_auto_renew;
                budget.alert_thresholds = self.settings.default_alert_thresholds.clone();
                budget
            }
        };
        if let Some(auto_renew) = auto_renew {
            budget.auto_renew = auto_renew;
        }

        self.persist(&budget)?;
        info!(%period, monthly = %budget.monthly_amount, "budget saved");
        Ok(budget)
    }

    /// Start an edit session for `period`
    pub fn begin_edit(&self, period: &BudgetPeriod) -> PaceResult<EditSession> {
        let registry = self.store.registry()?;
        let budget = self.budget_for(period)?;
        Ok(EditSession::start(budget.as_ref(), &registry))
    }

    /// Persist the outcome of an edit session
    ///
    /// A category-only budget stays category-only; otherwise the session's
    /// target becomes the monthly amount.
    pub fn save_session(&self, period: &BudgetPeriod, session: &EditSession) -> PaceResult<Budget> {
        let balance = session.balance();
        if !balance.balanced {
            warn!(
                difference = %balance.difference,
                target = %session.target_total(),
                "saving an unbalanced allocation"
            );
        }

        let allocations = session.finish();
        let budget = match self.budget_to_edit(period)? {
            Some(mut existing) => {
                let monthly = if existing.is_category_only() {
                    Money::zero()
                } else {
                    session.target_total()
                };
                existing.update(monthly, allocations);
                existing
            }
            None => {
                let mut budget =
                    Budget::new(*period, session.target_total()).with_allocations(allocations);
                budget.auto_renew = self.settings.default_auto_renew;
                budget.alert_thresholds = self.settings.default_alert_thresholds.clone();
                budget
            }
        };

        self.persist(&budget)?;
        info!(
            %period,
            categories = budget.category_allocations.len(),
            "allocations saved"
        );
        Ok(budget)
    }

    /// Patch a single category's allocation, keeping its lock flag
    pub fn set_category(
        &self,
        period: &BudgetPeriod,
        category: &str,
        amount: Money,
    ) -> PaceResult<Budget> {
        if amount.is_negative() {
            return Err(PaceError::Validation(
                "Category amount cannot be negative".into(),
            ));
        }
        let key = self.resolve_category(category)?;
        let mut budget = self
            .budget_to_edit(period)?
            .ok_or_else(|| PaceError::budget_not_found(period.to_string()))?;

        let locked = budget.allocation(&key).map(|a| a.locked).unwrap_or(false);
        budget.set_category_amount(key.clone(), amount, locked);

        self.persist(&budget)?;
        info!(category = %key, %amount, "category allocation updated");
        Ok(budget)
    }

    /// Delete the budget in force for `period`
    ///
    /// When that budget was renewed from an earlier month, the earlier
    /// month's record is the one deleted. Returns the deleted budget.
    pub fn delete_budget(&self, period: &BudgetPeriod) -> PaceResult<Option<Budget>> {
        let Some(budget) = self.budget_for(period)? else {
            return Ok(None);
        };
        let deleted = self.store.delete_budget(&budget.period)?;
        if let Some(deleted) = &deleted {
            info!(period = %deleted.period, "budget deleted");
        }
        Ok(deleted)
    }

    /// Record a purchase against a registry category
    pub fn record_spend(
        &self,
        date: NaiveDate,
        category: &str,
        amount: Money,
        memo: Option<String>,
    ) -> PaceResult<SpendEntry> {
        if !amount.is_positive() {
            return Err(PaceError::Validation("Spend amount must be positive".into()));
        }
        let key = self.resolve_category(category)?;

        let mut entry = SpendEntry::new(date, key, amount);
        if let Some(memo) = memo {
            entry = entry.with_memo(memo);
        }
        self.store.record_spend(entry.clone())?;
        debug!(id = %entry.id, category = %entry.category, amount = %entry.amount, "spend recorded");
        Ok(entry)
    }

    pub fn remove_spend(&self, id: &str) -> PaceResult<SpendEntry> {
        let removed = self.store.remove_spend(id)?;
        debug!(id = %removed.id, "spend removed");
        Ok(removed)
    }

    pub fn spend_entries(&self, period: &BudgetPeriod) -> PaceResult<Vec<SpendEntry>> {
        self.store.spend_entries(period)
    }

    fn resolve_category(&self, input: &str) -> PaceResult<CategoryKey> {
        self.store
            .registry()?
            .resolve(input)
            .map(|c| c.key.clone())
            .ok_or_else(|| PaceError::category_not_found(input))
    }

    fn persist(&self, budget: &Budget) -> PaceResult<()> {
        budget.validate()?;
        self.store.save_budget(budget)
    }
}
