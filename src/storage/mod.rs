//! Storage layer for budget-pace
//!
//! The engine's two collaborators are expressed as traits: `BudgetStore`
//! persists budgets and reports spend, `CategorySource` supplies the
//! category registry. `Storage` implements both on top of one `JsonFile`
//! per data file.

pub mod budget;
pub mod categories;
pub mod init;
pub mod json_file;
pub mod spend;

pub use budget::BudgetRepository;
pub use categories::CategoryRepository;
pub use init::initialize_storage;
pub use json_file::JsonFile;
pub use spend::SpendRepository;

use chrono::NaiveDate;
use tracing::debug;

use crate::config::paths::PacePaths;
use crate::error::PaceResult;
use crate::models::{Budget, BudgetPeriod, CategoryRegistry, CategorySpend, PeriodSpend, SpendEntry};

/// Persists budgets and reports spend for a period
///
/// Budgets are keyed by the period they were set for. Every mutating call
/// has reached disk by the time it returns `Ok`.
pub trait BudgetStore {
    /// The budget in force for `period`: its own, or the latest earlier
    /// budget that renews
    fn load_budget(&self, period: &BudgetPeriod) -> PaceResult<Option<Budget>>;

    /// Every stored budget, earliest period first
    fn budgets(&self) -> PaceResult<Vec<Budget>>;

    /// Store `budget` under its own period, replacing any budget there
    fn save_budget(&self, budget: &Budget) -> PaceResult<()>;

    /// Delete the budget set for exactly `period`, returning it
    fn delete_budget(&self, period: &BudgetPeriod) -> PaceResult<Option<Budget>>;

    fn category_spend(&self, period: &BudgetPeriod) -> PaceResult<Vec<CategorySpend>>;

    fn period_spend(&self, period: &BudgetPeriod, today: NaiveDate) -> PaceResult<PeriodSpend>;

    fn record_spend(&self, entry: SpendEntry) -> PaceResult<()>;

    fn remove_spend(&self, id: &str) -> PaceResult<SpendEntry>;

    fn spend_entries(&self, period: &BudgetPeriod) -> PaceResult<Vec<SpendEntry>>;
}

/// Supplies the canonical category registry
pub trait CategorySource {
    fn registry(&self) -> PaceResult<CategoryRegistry>;
}

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: PacePaths,
    pub budgets: BudgetRepository,
    pub spend: SpendRepository,
    pub categories: CategoryRepository,
}

impl Storage {
    pub fn new(paths: PacePaths) -> PaceResult<Self> {
        paths.ensure_directories()?;

        Ok(Self {
            budgets: BudgetRepository::new(paths.budget_file()),
            spend: SpendRepository::new(paths.spend_file()),
            categories: CategoryRepository::new(paths.categories_file()),
            paths,
        })
    }

    pub fn paths(&self) -> &PacePaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> PaceResult<()> {
        self.budgets.load()?;
        self.spend.load()?;
        self.categories.load()?;
        debug!(dir = %self.paths.data_dir().display(), "loaded storage");
        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        self.paths.is_initialized()
    }
}

impl BudgetStore for Storage {
    fn load_budget(&self, period: &BudgetPeriod) -> PaceResult<Option<Budget>> {
        self.budgets.in_force(period)
    }

    fn budgets(&self) -> PaceResult<Vec<Budget>> {
        self.budgets.all()
    }

    fn save_budget(&self, budget: &Budget) -> PaceResult<()> {
        self.budgets.upsert(budget.clone())
    }

    fn delete_budget(&self, period: &BudgetPeriod) -> PaceResult<Option<Budget>> {
        self.budgets.remove(period)
    }

    fn category_spend(&self, period: &BudgetPeriod) -> PaceResult<Vec<CategorySpend>> {
        self.spend.category_totals(period)
    }

    fn period_spend(&self, period: &BudgetPeriod, today: NaiveDate) -> PaceResult<PeriodSpend> {
        self.spend.period_totals(period, today)
    }

    fn record_spend(&self, entry: SpendEntry) -> PaceResult<()> {
        self.spend.add(entry)
    }

    fn remove_spend(&self, id: &str) -> PaceResult<SpendEntry> {
        self.spend.remove(id)
    }

    fn spend_entries(&self, period: &BudgetPeriod) -> PaceResult<Vec<SpendEntry>> {
        self.spend.get_for_period(period)
    }
}

impl CategorySource for Storage {
    fn registry(&self) -> PaceResult<CategoryRegistry> {
        self.categories.get()
    }
}
