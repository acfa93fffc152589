//! Spend entry display formatting

use crate::models::{CategoryRegistry, Money, SpendEntry};

/// Format spend entries as a table, oldest first, with a total line
pub fn format_spend_list(entries: &[SpendEntry], registry: &CategoryRegistry, symbol: &str) -> String {
    if entries.is_empty() {
        return "No spending recorded for this period.".to_string();
    }

    let mut sorted: Vec<&SpendEntry> = entries.iter().collect();
    sorted.sort_by(|a, b| a.date.cmp(&b.date).then(a.created_at.cmp(&b.created_at)));

    let name_width = sorted
        .iter()
        .map(|e| registry.display_name(&e.category).len())
        .max()
        .unwrap_or(8)
        .max(8);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<12}  {:<10}  {:<width$}  {:>10}  {}\n",
        "ID",
        "Date",
        "Category",
        "Amount",
        "Memo",
        width = name_width
    ));
    output.push_str(&format!(
        "{:-<12}  {:-<10}  {:-<width$}  {:->10}  {:-<4}\n",
        "",
        "",
        "",
        "",
        "",
        width = name_width
    ));

    for entry in &sorted {
        output.push_str(&format!(
            "{:<12}  {:<10}  {:<width$}  {:>10}  {}\n",
            entry.id.short(),
            entry.date.format("%Y-%m-%d"),
            registry.display_name(&entry.category),
            entry.amount.format_with_symbol(symbol),
            entry.memo,
            width = name_width
        ));
    }

    let total: Money = sorted.iter().map(|e| e.amount).sum();
    output.push_str(&format!(
        "\n{} entries, {} total\n",
        sorted.len(),
        total.format_with_symbol(symbol)
    ));

    output
}
