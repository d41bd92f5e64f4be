//! Storage initialization
//!
//! Handles first-run setup of the vault file.

use crate::config::paths::VaultPaths;
use crate::error::VaultError;

use super::file_io::{json_file_valid, write_json_atomic};

/// Initialize storage for a fresh installation
///
/// Creates the directory layout and an empty vault file. An existing vault
/// is left untouched.
pub fn initialize_storage(paths: &VaultPaths) -> Result<(), VaultError> {
    paths.ensure_directories()?;

    let vault_file = paths.vault_file();
    if !vault_file.exists() {
        write_json_atomic(&vault_file, &serde_json::json!({ "entries": [] }))?;
        tracing::info!(path = %vault_file.display(), "created empty vault");
    } else if !json_file_valid(&vault_file) {
        return Err(VaultError::Storage(format!(
            "Existing vault file is not valid JSON: {}",
            vault_file.display()
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_initialize_creates_empty_vault() {
        let temp_dir = TempDir::new().unwrap();
        let paths = VaultPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert!(!paths.vault_file().exists());
        initialize_storage(&paths).unwrap();
        assert!(paths.vault_file().exists());
        assert!(json_file_valid(paths.vault_file()));
    }

    #[test]
    fn test_initialize_keeps_existing_vault() {
        let temp_dir = TempDir::new().unwrap();
        let paths = VaultPaths::with_base_dir(temp_dir.path().to_path_buf());
        paths.ensure_directories().unwrap();

        let existing = r#"{"entries": [], "marker": true}"#;
        std::fs::write(paths.vault_file(), existing).unwrap();

        initialize_storage(&paths).unwrap();
        assert_eq!(std::fs::read_to_string(paths.vault_file()).unwrap(), existing);
    }

    #[test]
    fn test_initialize_rejects_corrupt_vault() {
        let temp_dir = TempDir::new().unwrap();
        let paths = VaultPaths::with_base_dir(temp_dir.path().to_path_buf());
        paths.ensure_directories().unwrap();
        std::fs::write(paths.vault_file(), "garbage").unwrap();

        assert!(initialize_storage(&paths).is_err());
    }
}
