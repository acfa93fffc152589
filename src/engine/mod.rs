//! Budget allocation and pacing engine
//!
//! Pure, synchronous functions over value types. Nothing in this module
//! touches storage or holds state between calls, so it is safe to call from
//! anywhere, as often as needed.
//!
//! - `allocation`: keeps category allocations summing to a target total
//! - `session`: the edit-session reducer and its initial ordering
//! - `progress`: turns a budget plus spend figures into a progress snapshot
//! - `review`: orderings for category review screens

pub mod allocation;
pub mod progress;
pub mod review;
pub mod session;

pub use allocation::{Balance, EditableAllocation};
pub use progress::calculate_progress;
pub use review::{group_categories, sort_categories, GroupReview, ReviewOrder};
pub use session::{AllocationAction, EditSession};
