//! Spending categories and the category registry
//!
//! Categories are identified by a string key. The registry supplies the
//! canonical ordering, display names, and grouping of those keys; nothing in
//! the engine invents keys of its own.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Key of a spending category, e.g. "groceries"
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryKey(String);

impl CategoryKey {
    /// Create a key, normalizing to trimmed lowercase
    pub fn new(key: impl AsRef<str>) -> Self {
        Self(key.as_ref().trim().to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CategoryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CategoryKey {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// One entry of the category registry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryCategory {
    pub key: CategoryKey,

    /// Display name
    pub name: String,

    /// Group name used by grouped review ordering
    pub group: String,
}

impl RegistryCategory {
    pub fn new(key: impl AsRef<str>, name: impl Into<String>, group: impl Into<String>) -> Self {
        Self {
            key: CategoryKey::new(key),
            name: name.into(),
            group: group.into(),
        }
    }
}

/// Ordered, read-only list of canonical spending categories
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRegistry {
    #[serde(default)]
    categories: Vec<RegistryCategory>,
}

impl CategoryRegistry {
    /// Build a registry; later duplicates of a key are ignored
    pub fn new(entries: impl IntoIterator<Item = RegistryCategory>) -> Self {
        let mut categories: Vec<RegistryCategory> = Vec::new();
        for entry in entries {
            if !categories.iter().any(|c| c.key == entry.key) {
                categories.push(entry);
            }
        }
        Self { categories }
    }

    /// The starter registry written by `pace init`
    pub fn default_registry() -> Self {
        let groups: [(&str, &[(&str, &str)]); 3] = [
            (
                "Essentials",
                &[
                    ("housing", "Housing"),
                    ("utilities", "Utilities"),
                    ("groceries", "Groceries"),
                    ("transportation", "Transportation"),
                    ("healthcare", "Healthcare"),
                ],
            ),
            (
                "Lifestyle",
                &[
                    ("dining", "Dining Out"),
                    ("entertainment", "Entertainment"),
                    ("shopping", "Shopping"),
                    ("subscriptions", "Subscriptions"),
                    ("travel", "Travel"),
                ],
            ),
            (
                "Financial",
                &[
                    ("savings", "Savings"),
                    ("debt", "Debt Payments"),
                    ("other", "Other"),
                ],
            ),
        ];

        Self::new(groups.iter().flat_map(|(group, cats)| {
            cats.iter()
                .map(move |(key, name)| RegistryCategory::new(key, *name, *group))
        }))
    }

    pub fn categories(&self) -> &[RegistryCategory] {
        &self.categories
    }

    pub fn keys(&self) -> impl Iterator<Item = &CategoryKey> {
        self.categories.iter().map(|c| &c.key)
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn get(&self, key: &CategoryKey) -> Option<&RegistryCategory> {
        self.categories.iter().find(|c| &c.key == key)
    }

    pub fn contains(&self, key: &CategoryKey) -> bool {
        self.get(key).is_some()
    }

    /// Canonical position of a key; unknown keys sort after every known one
    pub fn position(&self, key: &CategoryKey) -> usize {
        self.categories
            .iter()
            .position(|c| &c.key == key)
            .unwrap_or(self.categories.len())
    }

    /// Display name for a key, falling back to the key itself
    pub fn display_name<'a>(&'a self, key: &'a CategoryKey) -> &'a str {
        self.get(key).map(|c| c.name.as_str()).unwrap_or(key.as_str())
    }

    /// Group for a key; unknown keys land in "Other"
    pub fn group_of(&self, key: &CategoryKey) -> &str {
        self.get(key).map(|c| c.group.as_str()).unwrap_or("Other")
    }

    /// Resolve user input by key or by case-insensitive display name
    pub fn resolve(&self, input: &str) -> Option<&RegistryCategory> {
        let key = CategoryKey::new(input);
        self.get(&key).or_else(|| {
            self.categories
                .iter()
                .find(|c| c.name.eq_ignore_ascii_case(input.trim()))
        })
    }
}
