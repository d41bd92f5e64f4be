//! Vault entry repository for JSON storage
//!
//! Manages loading and saving entries to vault.json. Entries are stored
//! exactly as the codec produced them; this layer never sees plaintext.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::VaultError;
use crate::models::{EntryId, VaultEntry};

use super::file_io::{read_json, write_json_atomic};

/// Serializable vault file structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct VaultData {
    entries: Vec<VaultEntry>,
}

/// Repository for vault entry persistence
pub struct EntryRepository {
    path: PathBuf,
    data: RwLock<HashMap<EntryId, VaultEntry>>,
}

fn lock_error(e: impl std::fmt::Display) -> VaultError {
    VaultError::Storage(format!("Failed to acquire lock: {}", e))
}

/// Oldest first, id as tiebreak, so listings are reproducible
fn storage_order(entries: &mut [VaultEntry]) {
    entries.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
}

impl EntryRepository {
    /// Create a new entry repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load entries from disk
    pub fn load(&self) -> Result<(), VaultError> {
        let file_data: VaultData = read_json(&self.path)?;

        let mut data = self.data.write().map_err(lock_error)?;
        data.clear();
        for entry in file_data.entries {
            data.insert(entry.id, entry);
        }

        tracing::debug!(count = data.len(), path = %self.path.display(), "loaded vault");
        Ok(())
    }

    /// Save entries to disk
    pub fn save(&self) -> Result<(), VaultError> {
        let data = self.data.read().map_err(lock_error)?;

        let mut entries: Vec<_> = data.values().cloned().collect();
        storage_order(&mut entries);

        write_json_atomic(&self.path, &VaultData { entries })
    }

    /// Get an entry by ID
    pub fn get(&self, id: EntryId) -> Result<Option<VaultEntry>, VaultError> {
        let data = self.data.read().map_err(lock_error)?;
        Ok(data.get(&id).cloned())
    }

    /// Get all entries, oldest first
    pub fn get_all(&self) -> Result<Vec<VaultEntry>, VaultError> {
        let data = self.data.read().map_err(lock_error)?;

        let mut entries: Vec<_> = data.values().cloned().collect();
        storage_order(&mut entries);
        Ok(entries)
    }

    /// Insert or update an entry
    pub fn upsert(&self, entry: VaultEntry) -> Result<(), VaultError> {
        let mut data = self.data.write().map_err(lock_error)?;
        data.insert(entry.id, entry);
        Ok(())
    }

    /// Delete an entry, returning whether it existed
    pub fn delete(&self, id: EntryId) -> Result<bool, VaultError> {
        let mut data = self.data.write().map_err(lock_error)?;
        Ok(data.remove(&id).is_some())
    }

    /// Count entries
    pub fn count(&self) -> Result<usize, VaultError> {
        let data = self.data.read().map_err(lock_error)?;
        Ok(data.len())
    }
}
