//! Configuration module for budget-pace
//!
//! - Data directory resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::PacePaths;
pub use settings::Settings;
