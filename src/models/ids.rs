//! Strongly-typed ID wrappers for stored records
//!
//! Newtype wrappers keep budget IDs and spend-entry IDs from being mixed up.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

macro_rules! define_id {
    ($name:ident, $display_prefix:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Create a new random ID
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }

            /// Short form used in listings, e.g. `spd-1a2b3c4d`
            pub fn short(&self) -> String {
                format!("{}{}", $display_prefix, &self.0.to_string()[..8])
            }

            /// Whether `s` is this ID or a prefix of its short/full form
            pub fn matches(&self, s: &str) -> bool {
                let s = s.strip_prefix($display_prefix).unwrap_or(s);
                !s.is_empty() && self.0.to_string().starts_with(s)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.short())
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.strip_prefix($display_prefix).unwrap_or(s);
                Ok(Self(Uuid::parse_str(s)?))
            }
        }
    };
}

define_id!(BudgetId, "bgt-");
define_id!(SpendId, "spd-");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_display() {
        let id = SpendId::new();
        let display = id.to_string();
        assert!(display.starts_with("spd-"));
        assert_eq!(display.len(), 12);
    }

    #[test]
    fn test_id_matches_prefix() {
        let id = SpendId::new();
        assert!(id.matches(&id.short()));
        assert!(id.matches(&id.as_uuid().to_string()));
        assert!(!id.matches("spd-"));
    }

    #[test]
    fn test_id_parse_full() {
        let uuid_str = "550e8400-e29b-41d4-a716-446655440000";
        let id: BudgetId = uuid_str.parse().unwrap();
        assert_eq!(id.as_uuid().to_string(), uuid_str);
    }

    #[test]
    fn test_id_serialization() {
        let id = SpendId::new();
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: SpendId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
