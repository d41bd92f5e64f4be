//! CSV Export functionality
//!
//! Spreadsheet-friendly listing of entry metadata. Secrets are never
//! written, encrypted or otherwise.

use crate::error::{VaultError, VaultResult};
use crate::storage::Storage;
use std::io::Write;

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Export entry metadata to CSV
pub fn export_entries_csv<W: Write>(storage: &Storage, writer: W) -> VaultResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(["ID", "Title", "Created", "Updated"])
        .map_err(|e| VaultError::Export(e.to_string()))?;

    for entry in storage.entries.get_all()? {
        csv_writer
            .write_record([
                entry.id.as_uuid().to_string(),
                entry.title.clone(),
                entry.created_at.format(DATE_FORMAT).to_string(),
                entry.updated_at.format(DATE_FORMAT).to_string(),
            ])
            .map_err(|e| VaultError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| VaultError::Export(e.to_string()))?;

    Ok(())
}
