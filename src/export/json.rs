//! JSON Export functionality
//!
//! Exports the vault to JSON with schema versioning. Entries are written as
//! they are at rest, so an export never contains plaintext secrets.

use crate::error::{VaultError, VaultResult};
use crate::models::VaultEntry;
use crate::storage::Storage;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::io::Write;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full vault export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// All entries, still encrypted
    pub entries: Vec<VaultEntry>,
}

impl FullExport {
    /// Create a new full export from storage
    pub fn from_storage(storage: &Storage) -> VaultResult<Self> {
        Ok(Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            entries: storage.entries.get_all()?,
        })
    }

    /// Validate the export structure
    pub fn validate(&self) -> Result<(), String> {
        if self.schema_version != EXPORT_SCHEMA_VERSION {
            return Err(format!(
                "Schema version mismatch: expected {}, got {}",
                EXPORT_SCHEMA_VERSION, self.schema_version
            ));
        }

        let mut seen = HashSet::new();
        for entry in &self.entries {
            if !seen.insert(entry.id) {
                return Err(format!("Duplicate entry id {}", entry.id));
            }
            if entry.title.trim().is_empty() {
                return Err(format!("Entry {} has an empty title", entry.id));
            }
            entry
                .envelope
                .validate_shape()
                .map_err(|e| format!("Entry {} has a malformed envelope: {}", entry.id, e))?;
        }

        Ok(())
    }
}

/// Export the full vault to JSON
pub fn export_full_json<W: Write>(storage: &Storage, writer: &mut W, pretty: bool) -> VaultResult<()> {
    let export = FullExport::from_storage(storage)?;

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    }
    .map_err(|e| VaultError::Export(e.to_string()))?;

    Ok(())
}

/// Import from a JSON export (for verification/restore)
pub fn import_from_json(json_str: &str) -> VaultResult<FullExport> {
    let export: FullExport =
        serde_json::from_str(json_str).map_err(|e| VaultError::Import(e.to_string()))?;

    export.validate().map_err(VaultError::Import)?;

    Ok(export)
}
