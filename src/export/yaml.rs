//! YAML Export functionality
//!
//! Exports the vault to YAML for a human-readable backup.

use crate::error::{VaultError, VaultResult};
use crate::export::json::FullExport;
use crate::storage::Storage;
use std::io::Write;

fn export_error(e: impl std::fmt::Display) -> VaultError {
    VaultError::Export(e.to_string())
}

/// Export the full vault to YAML format
pub fn export_full_yaml<W: Write>(storage: &Storage, writer: &mut W) -> VaultResult<()> {
    let export = FullExport::from_storage(storage)?;

    writeln!(writer, "# passvault export").map_err(export_error)?;
    writeln!(writer, "# Generated: {}", export.exported_at).map_err(export_error)?;
    writeln!(writer, "# App Version: {}", export.app_version).map_err(export_error)?;
    writeln!(writer, "#").map_err(export_error)?;
    writeln!(
        writer,
        "# Secrets stay encrypted; the passphrase is needed to read them."
    )
    .map_err(export_error)?;
    writeln!(writer).map_err(export_error)?;

    serde_yaml::to_writer(writer, &export).map_err(export_error)?;

    Ok(())
}

/// Import from a YAML export
pub fn import_from_yaml(yaml_str: &str) -> VaultResult<FullExport> {
    let export: FullExport =
        serde_yaml::from_str(yaml_str).map_err(|e| VaultError::Import(e.to_string()))?;

    export.validate().map_err(VaultError::Import)?;

    Ok(export)
}
