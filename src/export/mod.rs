//! Export module for passvault
//!
//! Provides vault export in multiple formats:
//! - JSON: machine-readable full export, importable for verification
//! - YAML: human-readable full export
//! - CSV: entry metadata only

pub mod csv;
pub mod json;
pub mod yaml;

pub use csv::export_entries_csv;
pub use json::{export_full_json, import_from_json, FullExport, EXPORT_SCHEMA_VERSION};
pub use yaml::{export_full_yaml, import_from_yaml};
