//! budget-pace - Monthly budget allocation and spending pace tracker
//!
//! This library splits a monthly budget across spending categories and
//! reports how spending is pacing against the calendar.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, periods, budgets, spend, progress)
//! - `engine`: Allocation engine, edit sessions, and the progress calculator
//! - `storage`: JSON file storage layer
//! - `services`: Composition of storage and engine, plus the screen state machine
//! - `display`: Plain-text formatting
//! - `cli`: Command handlers for the `pace` binary
//!
//! # Example
//!
//! ```rust,ignore
//! use budget_pace::config::{paths::PacePaths, settings::Settings};
//!
//! let paths = PacePaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! ```

use std::sync::Once;

pub mod cli;
pub mod config;
pub mod display;
pub mod engine;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{PaceError, PaceResult};

/// Environment variable holding the tracing filter
pub const LOG_ENV: &str = "PACE_LOG";

static TRACING_INIT: Once = Once::new();

/// Install the global tracing subscriber once
///
/// The filter comes from `PACE_LOG`; without it only warnings from this crate
/// are shown, or debug output when `verbose` is set. Logs go to stderr.
pub fn init_tracing(verbose: bool) {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let fallback = if verbose {
            "budget_pace=debug"
        } else {
            "budget_pace=warn"
        };
        let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback));

        fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    });
}
