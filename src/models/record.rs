//! Plaintext record model
//!
//! The sensitive half of a vault entry. Only ever held in memory; it reaches
//! disk exclusively as an encrypted envelope.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Field name for the account username
pub const USERNAME: &str = "username";
/// Field name for the account password
pub const PASSWORD: &str = "password";
/// Field name for free-form notes
pub const NOTES: &str = "notes";

/// An ordered mapping of named string fields
///
/// No field is required at this layer. Keys are kept sorted so the JSON
/// serialization of a record is canonical.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlaintextRecord {
    fields: BTreeMap<String, String>,
}

impl PlaintextRecord {
    /// Create an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the standard username/password/notes record
    pub fn credentials(
        username: impl Into<String>,
        password: impl Into<String>,
        notes: impl Into<String>,
    ) -> Self {
        Self::new()
            .with(USERNAME, username)
            .with(PASSWORD, password)
            .with(NOTES, notes)
    }

    /// Builder-style insert
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    /// Set a field, returning the previous value if any
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.fields.insert(name.into(), value.into())
    }

    /// Get a field by name
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    pub fn username(&self) -> Option<&str> {
        self.get(USERNAME)
    }

    pub fn password(&self) -> Option<&str> {
        self.get(PASSWORD)
    }

    pub fn notes(&self) -> Option<&str> {
        self.get(NOTES)
    }

    /// Iterate fields in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for PlaintextRecord
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

// Field values are secrets; only names are shown
impl fmt::Debug for PlaintextRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlaintextRecord")
            .field("fields", &self.fields.keys().collect::<Vec<_>>())
            .finish()
    }
}
