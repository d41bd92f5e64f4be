//! Entry service
//!
//! Business logic for vault entries: validation, encryption on the way in,
//! decryption on the way out, and listing through the index.

use crate::crypto::Codec;
use crate::error::{VaultError, VaultResult};
use crate::index::{SortOrder, VaultIndex};
use crate::models::{EntryDraft, EntryId, PlaintextRecord, VaultEntry};
use crate::storage::Storage;

/// Service for vault entry management
pub struct EntryService<'a> {
    storage: &'a Storage,
    codec: &'a Codec,
}

impl<'a> EntryService<'a> {
    /// Create a new entry service
    pub fn new(storage: &'a Storage, codec: &'a Codec) -> Self {
        Self { storage, codec }
    }

    /// Validate a draft and encrypt its sensitive fields
    fn seal(&self, draft: EntryDraft, passphrase: &str) -> VaultResult<(String, crate::crypto::EncryptedEnvelope)> {
        let (title, record) = draft
            .into_parts()
            .map_err(|e| VaultError::Validation(e.to_string()))?;
        let envelope = self.codec.encrypt(&record, passphrase)?;
        Ok((title, envelope))
    }

    /// Create a new entry
    pub fn create(&self, draft: EntryDraft, passphrase: &str) -> VaultResult<VaultEntry> {
        let (title, envelope) = self.seal(draft, passphrase)?;
        let entry = VaultEntry::new(title, envelope);

        self.storage.entries.upsert(entry.clone())?;
        self.storage.entries.save()?;

        tracing::info!(entry = %entry.id, "created entry");
        Ok(entry)
    }

    /// Replace an entry's title and secrets
    ///
    /// Always produces a brand-new envelope; the previous one is discarded.
    pub fn update(&self, id: EntryId, draft: EntryDraft, passphrase: &str) -> VaultResult<VaultEntry> {
        let mut entry = self
            .storage
            .entries
            .get(id)?
            .ok_or_else(|| VaultError::entry_not_found(id.to_string()))?;

        let (title, envelope) = self.seal(draft, passphrase)?;
        entry.replace(title, envelope);

        self.storage.entries.upsert(entry.clone())?;
        self.storage.entries.save()?;

        tracing::info!(entry = %entry.id, "updated entry");
        Ok(entry)
    }

    /// Delete an entry
    pub fn delete(&self, id: EntryId) -> VaultResult<VaultEntry> {
        let entry = self
            .storage
            .entries
            .get(id)?
            .ok_or_else(|| VaultError::entry_not_found(id.to_string()))?;

        self.storage.entries.delete(id)?;
        self.storage.entries.save()?;

        tracing::info!(entry = %id, "deleted entry");
        Ok(entry)
    }

    /// Get an entry by ID
    pub fn get(&self, id: EntryId) -> VaultResult<Option<VaultEntry>> {
        self.storage.entries.get(id)
    }

    /// Find an entry by ID (full or short form) or exact title
    ///
    /// Titles are compared case-insensitively. An ambiguous title is an
    /// error rather than a guess.
    pub fn find(&self, identifier: &str) -> VaultResult<Option<VaultEntry>> {
        let entries = self.storage.entries.get_all()?;

        if let Some(entry) = entries.iter().find(|e| e.id.matches(identifier)) {
            return Ok(Some(entry.clone()));
        }

        let wanted = identifier.trim().to_lowercase();
        let mut by_title = entries
            .into_iter()
            .filter(|e| e.title.to_lowercase() == wanted);

        match (by_title.next(), by_title.next()) {
            (Some(_), Some(_)) => Err(VaultError::Validation(format!(
                "Several entries are titled '{}'; use the entry ID instead",
                identifier
            ))),
            (found, _) => Ok(found),
        }
    }

    /// Find an entry or fail with a not-found error
    pub fn require(&self, identifier: &str) -> VaultResult<VaultEntry> {
        self.find(identifier)?
            .ok_or_else(|| VaultError::entry_not_found(identifier))
    }

    /// Decrypt an entry's secrets
    pub fn reveal(&self, id: EntryId, passphrase: &str) -> VaultResult<(VaultEntry, PlaintextRecord)> {
        let entry = self
            .storage
            .entries
            .get(id)?
            .ok_or_else(|| VaultError::entry_not_found(id.to_string()))?;

        let record = self.codec.decrypt(&entry.envelope, passphrase)?;
        Ok((entry, record))
    }

    /// Build a draft pre-filled with an entry's current values
    ///
    /// Used by edits that change only some fields.
    pub fn draft_from(&self, id: EntryId, passphrase: &str) -> VaultResult<EntryDraft> {
        let (entry, record) = self.reveal(id, passphrase)?;
        Ok(EntryDraft::new(
            entry.title,
            record.username().unwrap_or_default(),
            record.password().unwrap_or_default(),
        )
        .with_notes(record.notes().unwrap_or_default()))
    }

    /// List entries matching `query` in `order`
    pub fn list(&self, query: &str, order: SortOrder, passphrase: &str) -> VaultResult<Vec<VaultEntry>> {
        let snapshot = self.storage.entries.get_all()?;
        Ok(VaultIndex::new(self.codec).filter_and_sort(&snapshot, query, order, passphrase))
    }

    /// Count entries
    pub fn count(&self) -> VaultResult<usize> {
        self.storage.entries.count()
    }
}
