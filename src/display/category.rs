//! Category registry display formatting
//!
//! Formats the registry as a tree grouped by category group.

use crate::models::CategoryRegistry;

/// Format the registry as a tree, groups in first-seen order
pub fn format_category_tree(registry: &CategoryRegistry) -> String {
    if registry.is_empty() {
        return "No categories found.\n\nRun 'pace init' to create default categories."
            .to_string();
    }

    let mut groups: Vec<(&str, Vec<(&str, &str)>)> = Vec::new();
    for category in registry.categories() {
        let entry = (category.key.as_str(), category.name.as_str());
        match groups.iter_mut().find(|(name, _)| *name == category.group) {
            Some((_, members)) => members.push(entry),
            None => groups.push((category.group.as_str(), vec![entry])),
        }
    }

    let mut output = String::new();
    for (i, (group, members)) in groups.iter().enumerate() {
        output.push_str(&format!("{}\n", group));

        for (j, (key, name)) in members.iter().enumerate() {
            let prefix = if j == members.len() - 1 {
                "└── "
            } else {
                "├── "
            };
            output.push_str(&format!("  {}{} ({})\n", prefix, name, key));
        }

        // Blank line between groups
        if i < groups.len() - 1 {
            output.push('\n');
        }
    }

    output
}
