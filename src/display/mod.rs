//! Display formatting for terminal output
//!
//! Plain-text tables for progress, the allocation editor, category review,
//! spend entries, and the category registry. Every formatter takes the
//! currency symbol from settings.

pub mod budget;
pub mod category;
pub mod progress;
pub mod review;
pub mod session;
pub mod spend;

pub use budget::format_budget_details;
pub use category::format_category_tree;
pub use progress::{format_category_rows, format_progress};
pub use review::format_review;
pub use session::format_session;
pub use spend::format_spend_list;
