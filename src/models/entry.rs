//! Vault entry model
//!
//! A vault entry pairs a plaintext title with one encrypted envelope. Editing
//! an entry replaces the envelope wholesale; envelopes are never patched.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::EntryId;
use super::record::PlaintextRecord;
use crate::crypto::EncryptedEnvelope;

/// A stored vault entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VaultEntry {
    /// Unique identifier
    pub id: EntryId,

    /// Plaintext title, searchable without decryption
    pub title: String,

    /// Encrypted username/password/notes
    #[serde(flatten)]
    pub envelope: EncryptedEnvelope,

    /// When the entry was created
    pub created_at: DateTime<Utc>,

    /// When the entry was last modified
    pub updated_at: DateTime<Utc>,
}

impl VaultEntry {
    /// Create a new entry
    pub fn new(title: impl Into<String>, envelope: EncryptedEnvelope) -> Self {
        let now = Utc::now();
        Self {
            id: EntryId::new(),
            title: title.into(),
            envelope,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace title and envelope after an edit, keeping identity and
    /// creation time
    pub fn replace(&mut self, title: impl Into<String>, envelope: EncryptedEnvelope) {
        self.title = title.into();
        self.envelope = envelope;
        self.updated_at = Utc::now().max(self.created_at);
    }

    /// Case-insensitive substring match against the title
    ///
    /// `needle` must already be lowercased.
    pub fn title_contains(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
    }
}

impl fmt::Display for VaultEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.title, self.id)
    }
}

/// Validation errors for entry drafts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftValidationError {
    MissingTitle,
    MissingCredentials,
}

impl fmt::Display for DraftValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingTitle => write!(f, "Title is required"),
            Self::MissingCredentials => write!(f, "Username and password are required"),
        }
    }
}

impl std::error::Error for DraftValidationError {}

/// User input for creating or editing an entry
#[derive(Clone, Default)]
pub struct EntryDraft {
    pub title: String,
    pub username: String,
    pub password: String,
    pub notes: String,
}

impl EntryDraft {
    /// Create a draft without notes
    pub fn new(
        title: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            username: username.into(),
            password: password.into(),
            notes: String::new(),
        }
    }

    /// Attach notes
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    /// Validate the draft
    pub fn validate(&self) -> Result<(), DraftValidationError> {
        if self.title.trim().is_empty() {
            return Err(DraftValidationError::MissingTitle);
        }
        if self.username.trim().is_empty() || self.password.trim().is_empty() {
            return Err(DraftValidationError::MissingCredentials);
        }
        Ok(())
    }

    /// Validate, trim, and split into title and sensitive record
    pub fn into_parts(self) -> Result<(String, PlaintextRecord), DraftValidationError> {
        self.validate()?;
        let record = PlaintextRecord::credentials(
            self.username.trim(),
            self.password.trim(),
            self.notes.trim(),
        );
        Ok((self.title.trim().to_string(), record))
    }
}

// Draft fields other than the title are secrets
impl fmt::Debug for EntryDraft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntryDraft")
            .field("title", &self.title)
            .finish_non_exhaustive()
    }
}
