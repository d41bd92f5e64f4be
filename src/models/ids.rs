//! Strongly-typed ID wrapper for vault entries
//!
//! The storage layer owns identity; the codec never sees it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Prefix used in the short display form
const ENTRY_PREFIX: &str = "ent-";

/// Unique identifier of a vault entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(Uuid);

impl EntryId {
    /// Create a new random ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Get the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// Short form shown in listings, e.g. `ent-550e8400`
    pub fn short(&self) -> String {
        format!("{}{}", ENTRY_PREFIX, &self.0.simple().to_string()[..8])
    }

    /// Check whether an identifier typed by a user refers to this ID
    ///
    /// Accepts the full UUID (with or without prefix) or the short form.
    pub fn matches(&self, identifier: &str) -> bool {
        let identifier = identifier.trim();
        if let Ok(id) = identifier.parse::<EntryId>() {
            return id == *self;
        }
        identifier.eq_ignore_ascii_case(&self.short())
    }
}

impl Default for EntryId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.short())
    }
}

impl FromStr for EntryId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.strip_prefix(ENTRY_PREFIX).unwrap_or(s);
        Ok(Self(Uuid::parse_str(s)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_creation() {
        let id = EntryId::new();
        assert!(!id.as_uuid().is_nil());
    }

    #[test]
    fn test_id_display() {
        let id = EntryId::new();
        let display = id.to_string();
        assert!(display.starts_with("ent-"));
        assert_eq!(display.len(), 12);
    }

    #[test]
    fn test_id_serialization() {
        let id = EntryId::new();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", id.as_uuid()));
        let deserialized: EntryId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }

    #[test]
    fn test_id_parse() {
        let uuid_str = "550e8400-e29b-41d4-a716-446655440000";
        let id: EntryId = uuid_str.parse().unwrap();
        assert_eq!(id.as_uuid().to_string(), uuid_str);

        let prefixed: EntryId = format!("ent-{}", uuid_str).parse().unwrap();
        assert_eq!(id, prefixed);
    }

    #[test]
    fn test_matches_short_and_full_forms() {
        let id: EntryId = "550e8400-e29b-41d4-a716-446655440000".parse().unwrap();
        assert!(id.matches("ent-550e8400"));
        assert!(id.matches("ENT-550E8400"));
        assert!(id.matches("550e8400-e29b-41d4-a716-446655440000"));
        assert!(!id.matches("ent-00000000"));
        assert!(!id.matches("Bank"));
    }
}
