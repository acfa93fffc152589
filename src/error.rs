//! Error types for budget-pace
//!
//! The allocation and progress engines never fail. Everything here comes
//! from the edges around them: parsing user input, validating a budget
//! before it is stored, and reading or writing the data files.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::models::{BudgetValidationError, MoneyParseError, PeriodParseError};

/// The main error type for budget-pace operations
#[derive(Error, Debug)]
pub enum PaceError {
    #[error("Configuration error: {0}")]
    Config(String),

    /// A data or settings file could not be read, written, or removed
    #[error("Failed to {action} {}: {source}", .path.display())]
    File {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A data file exists but does not hold the expected JSON
    #[error("Corrupt data in {}: {source}", .path.display())]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid amount: {0}")]
    Amount(#[from] MoneyParseError),

    #[error("Invalid period: {0}")]
    Period(#[from] PeriodParseError),

    /// A budget failed validation and was not stored
    #[error("Invalid budget: {0}")]
    InvalidBudget(#[from] BudgetValidationError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// A writer panicked while holding a repository lock
    #[error("Storage lock poisoned: {0}")]
    LockPoisoned(String),

    /// The progress screen finished in its error state
    #[error("Could not load progress: {0}")]
    Load(String),
}

impl PaceError {
    /// Wrap an I/O failure on `path`, for use with `map_err`
    pub fn file(action: &'static str, path: &Path) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.to_path_buf();
        move |source| Self::File {
            action,
            path,
            source,
        }
    }

    pub fn category_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Category",
            identifier: identifier.into(),
        }
    }

    pub fn spend_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Spend entry",
            identifier: identifier.into(),
        }
    }

    pub fn budget_not_found(period: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Budget",
            identifier: period.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Whether the error is the user's input rather than the environment
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::Validation(_) | Self::Amount(_) | Self::Period(_) | Self::InvalidBudget(_)
        )
    }
}

impl<T> From<std::sync::PoisonError<T>> for PaceError {
    fn from(err: std::sync::PoisonError<T>) -> Self {
        Self::LockPoisoned(err.to_string())
    }
}

/// Result type alias for budget-pace operations
pub type PaceResult<T> = Result<T, PaceError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_error_display() {
        let err = PaceError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_not_found_error() {
        let err = PaceError::category_not_found("groceries");
        assert_eq!(err.to_string(), "Category not found: groceries");
        assert!(err.is_not_found());
        assert!(!err.is_validation());

        let err = PaceError::budget_not_found("2025-03");
        assert_eq!(err.to_string(), "Budget not found: 2025-03");
    }

    #[test]
    fn test_file_error_keeps_path_and_source() {
        let path = PathBuf::from("/data/spend.json");
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = PaceError::file("write", &path)(io_err);

        assert_eq!(err.to_string(), "Failed to write /data/spend.json: denied");
        assert!(err.source().is_some());
    }

    #[test]
    fn test_parse_errors_count_as_validation() {
        let err: PaceError = MoneyParseError::InvalidFormat("abc".into()).into();
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "Invalid amount: Invalid money format: abc");

        let err: PaceError = PeriodParseError::InvalidMonth(13).into();
        assert!(err.is_validation());

        let err: PaceError = BudgetValidationError::NegativeTotal.into();
        assert!(err.is_validation());
        assert!(!PaceError::Load("gone".into()).is_validation());
    }
}
