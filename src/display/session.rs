//! Allocation editor display
//!
//! Shows an edit session's working set with lock and edit markers and the
//! balance footer.

use crate::engine::EditSession;
use crate::models::CategoryRegistry;

/// Format the working set of an edit session
pub fn format_session(session: &EditSession, registry: &CategoryRegistry, symbol: &str) -> String {
    let allocations = session.allocations();
    let name_width = allocations
        .iter()
        .map(|a| registry.display_name(&a.category).len())
        .max()
        .unwrap_or(8)
        .max(8);

    let mut output = String::new();
    output.push_str(&format!(
        "{:>3}  {:<width$}  {:>10}  {:>10}\n",
        "#",
        "Category",
        "Amount",
        "Was",
        width = name_width
    ));
    output.push_str(&format!(
        "{:->3}  {:-<width$}  {:->10}  {:->10}\n",
        "",
        "",
        "",
        "",
        width = name_width
    ));

    for (index, allocation) in allocations.iter().enumerate() {
        let mut flags = String::new();
        if allocation.locked {
            flags.push_str(" locked");
        }
        if allocation.is_edited() {
            flags.push_str(" edited");
        }
        output.push_str(&format!(
            "{:>3}  {:<width$}  {:>10}  {:>10}{}\n",
            index,
            registry.display_name(&allocation.category),
            allocation.amount.format_with_symbol(symbol),
            allocation.original_amount.format_with_symbol(symbol),
            flags,
            width = name_width
        ));
    }

    let balance = session.balance();
    output.push('\n');
    output.push_str(&format!(
        "Allocated: {} of {}",
        balance.total_saved.format_with_symbol(symbol),
        session.target_total().format_with_symbol(symbol)
    ));
    if balance.balanced {
        output.push_str(" (balanced)\n");
    } else if balance.difference.is_positive() {
        output.push_str(&format!(
            " ({} over)\n",
            balance.difference.format_with_symbol(symbol)
        ));
    } else {
        output.push_str(&format!(
            " ({} unallocated)\n",
            balance.difference.abs().format_with_symbol(symbol)
        ));
    }

    output
}
