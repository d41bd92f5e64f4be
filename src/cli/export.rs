//! CLI commands for vault export

use crate::error::{VaultError, VaultResult};
use crate::export::{csv, json, yaml};
use crate::storage::Storage;
use chrono::Utc;
use clap::ValueEnum;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// JSON format (full vault, encrypted)
    Json,
    /// YAML format (full vault, encrypted, human-readable)
    Yaml,
    /// CSV format (entry metadata only)
    Csv,
}

impl ExportFormat {
    fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
            Self::Csv => "csv",
        }
    }
}

/// Default export location: `exports/passvault-<timestamp>.<ext>`
fn default_output(storage: &Storage, format: ExportFormat) -> PathBuf {
    storage.paths().export_dir().join(format!(
        "passvault-{}.{}",
        Utc::now().format("%Y%m%d-%H%M%S"),
        format.extension()
    ))
}

/// Handle the export command
pub fn handle_export_command(
    storage: &Storage,
    format: ExportFormat,
    output: Option<PathBuf>,
) -> VaultResult<()> {
    let output = output.unwrap_or_else(|| default_output(storage, format));

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            VaultError::Export(format!("Failed to create {}: {}", parent.display(), e))
        })?;
    }

    let file = File::create(&output).map_err(|e| {
        VaultError::Export(format!("Failed to create file {}: {}", output.display(), e))
    })?;
    let mut writer = BufWriter::new(file);

    match format {
        ExportFormat::Json => json::export_full_json(storage, &mut writer, true)?,
        ExportFormat::Yaml => yaml::export_full_yaml(storage, &mut writer)?,
        ExportFormat::Csv => csv::export_entries_csv(storage, &mut writer)?,
    }

    writer
        .flush()
        .map_err(|e| VaultError::Export(e.to_string()))?;

    let count = storage.entries.count()?;
    tracing::info!(path = %output.display(), count, "exported vault");
    println!("Exported {} entries to: {}", count, output.display());
    if format == ExportFormat::Csv {
        println!("Note: CSV exports titles and dates only. Use JSON or YAML for a full backup.");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::VaultPaths;
    use tempfile::TempDir;

    #[test]
    fn test_export_to_default_location() {
        let temp_dir = TempDir::new().unwrap();
        let paths = VaultPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();

        handle_export_command(&storage, ExportFormat::Yaml, None).unwrap();

        let exported: Vec<_> = std::fs::read_dir(storage.paths().export_dir())
            .unwrap()
            .map(|e| e.unwrap().path())
            .collect();
        assert_eq!(exported.len(), 1);
        assert_eq!(exported[0].extension().unwrap(), "yaml");
    }

    #[test]
    fn test_export_to_explicit_path() {
        let temp_dir = TempDir::new().unwrap();
        let paths = VaultPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();

        let output = temp_dir.path().join("out").join("vault.json");
        handle_export_command(&storage, ExportFormat::Json, Some(output.clone())).unwrap();

        let contents = std::fs::read_to_string(output).unwrap();
        assert!(json::import_from_json(&contents).unwrap().entries.is_empty());
    }
}
