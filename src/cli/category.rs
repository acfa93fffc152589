//! Category CLI command
//!
//! Prints the category registry that budgets and spend are keyed against.

use crate::display::format_category_tree;
use crate::error::PaceResult;
use crate::storage::{CategorySource, Storage};

/// Handle `pace categories`
pub fn handle_categories_command(storage: &Storage) -> PaceResult<()> {
    let registry = storage.registry()?;
    print!("{}", format_category_tree(&registry));
    Ok(())
}
