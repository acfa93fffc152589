//! Budget screen state machine
//!
//! `Idle → Loading → {NoBudget | Active | Error}`. Progress snapshots are
//! plugged into `Active`; a refresh from any settled state goes back through
//! `Loading`.

use std::fmt;

use crate::error::PaceResult;
use crate::models::BudgetProgress;

#[derive(Debug, Clone, Default)]
pub enum ScreenState {
    #[default]
    Idle,
    Loading,
    NoBudget,
    Active(Box<BudgetProgress>),
    Error(String),
}

impl ScreenState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn progress(&self) -> Option<&BudgetProgress> {
        match self {
            Self::Active(progress) => Some(progress.as_ref()),
            _ => None,
        }
    }

    /// Start a load or refresh; ignored while a load is already running
    pub fn begin_refresh(&mut self) -> bool {
        if self.is_loading() {
            return false;
        }
        *self = Self::Loading;
        true
    }

    /// Settle a running load with its outcome
    pub fn resolve(&mut self, outcome: PaceResult<Option<BudgetProgress>>) -> bool {
        if !self.is_loading() {
            return false;
        }
        *self = match outcome {
            Ok(Some(progress)) => Self::Active(Box::new(progress)),
            Ok(None) => Self::NoBudget,
            Err(e) => Self::Error(e.to_string()),
        };
        true
    }

    /// The active budget was deleted
    pub fn deleted(&mut self) -> bool {
        if !matches!(self, Self::Active(_)) {
            return false;
        }
        *self = Self::NoBudget;
        true
    }
}

impl fmt::Display for ScreenState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Loading => write!(f, "loading"),
            Self::NoBudget => write!(f, "no budget"),
            Self::Active(progress) => write!(f, "active ({})", progress.period),
            Self::Error(message) => write!(f, "error: {}", message),
        }
    }
}
