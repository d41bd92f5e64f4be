//! File I/O utilities with atomic writes
//!
//! A crash mid-write leaves either the old vault file or the new one on
//! disk, never a truncated mix.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};
use tempfile::NamedTempFile;

use crate::error::VaultError;

fn open_reader(path: &Path) -> Result<BufReader<File>, VaultError> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|e| VaultError::Storage(format!("Failed to open {}: {}", path.display(), e)))
}

/// Read JSON from a file, returning a default value if file doesn't exist
pub fn read_json<T, P>(path: P) -> Result<T, VaultError>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if !path.exists() {
        return Ok(T::default());
    }

    serde_json::from_reader(open_reader(path)?)
        .map_err(|e| VaultError::Storage(format!("Failed to parse {}: {}", path.display(), e)))
}

/// Write JSON to a file atomically
///
/// The data goes to a temporary file beside `path`, which is synced and then
/// renamed over the target. The temporary file is removed on every failure.
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), VaultError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    fs::create_dir_all(dir).map_err(|e| {
        VaultError::Storage(format!("Failed to create directory {}: {}", dir.display(), e))
    })?;

    let mut staged = NamedTempFile::new_in(dir)
        .map_err(|e| VaultError::Storage(format!("Failed to create temp file: {}", e)))?;

    {
        let mut writer = BufWriter::new(staged.as_file_mut());
        serde_json::to_writer_pretty(&mut writer, data)
            .map_err(|e| VaultError::Storage(format!("Failed to serialize data: {}", e)))?;
        writer
            .flush()
            .map_err(|e| VaultError::Storage(format!("Failed to flush data: {}", e)))?;
    }

    staged
        .as_file()
        .sync_all()
        .map_err(|e| VaultError::Storage(format!("Failed to sync data: {}", e)))?;

    staged.persist(path).map_err(|e| {
        VaultError::Storage(format!("Failed to replace {}: {}", path.display(), e.error))
    })?;

    Ok(())
}

/// Check if a JSON file exists and parses
pub fn json_file_valid<P: AsRef<Path>>(path: P) -> bool {
    let path = path.as_ref();
    path.exists()
        && open_reader(path)
            .map(|reader| serde_json::from_reader::<_, serde_json::Value>(reader).is_ok())
            .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use std::collections::HashMap;
    use tempfile::TempDir;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
    struct Sample {
        title: String,
        count: u32,
    }

    fn sample() -> Sample {
        Sample {
            title: "vault".to_string(),
            count: 3,
        }
    }

    #[test]
    fn test_read_nonexistent_returns_default() {
        let temp_dir = TempDir::new().unwrap();
        let data: Sample = read_json(temp_dir.path().join("missing.json")).unwrap();
        assert_eq!(data, Sample::default());
    }

    #[test]
    fn test_write_and_read() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("vault.json");

        write_json_atomic(&path, &sample()).unwrap();
        let loaded: Sample = read_json(&path).unwrap();

        assert_eq!(loaded, sample());
        assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_failed_write_leaves_no_temp_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("vault.json");
        write_json_atomic(&path, &sample()).unwrap();

        // JSON object keys must be strings
        let unserializable: HashMap<(u8, u8), u8> = HashMap::from([((1, 2), 3)]);
        let result = write_json_atomic(&path, &unserializable);

        assert!(matches!(result, Err(VaultError::Storage(_))));
        let names: Vec<_> = fs::read_dir(temp_dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from("vault.json")]);

        let loaded: Sample = read_json(&path).unwrap();
        assert_eq!(loaded, sample());
    }

    #[test]
    fn test_write_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("dir").join("vault.json");

        write_json_atomic(&path, &sample()).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_read_corrupt_file_errors() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("vault.json");
        fs::write(&path, "not json at all").unwrap();

        let result: Result<Sample, _> = read_json(&path);
        assert!(matches!(result, Err(VaultError::Storage(_))));
    }

    #[test]
    fn test_json_file_valid() {
        let temp_dir = TempDir::new().unwrap();
        let valid_path = temp_dir.path().join("valid.json");
        let invalid_path = temp_dir.path().join("invalid.json");

        fs::write(&valid_path, r#"{"title": "vault"}"#).unwrap();
        fs::write(&invalid_path, "{").unwrap();

        assert!(json_file_valid(&valid_path));
        assert!(!json_file_valid(&invalid_path));
        assert!(!json_file_valid(temp_dir.path().join("missing.json")));
    }
}
