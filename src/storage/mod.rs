//! Storage layer for passvault
//!
//! Local stand-in for the remote entry store: JSON file storage with atomic
//! writes and automatic directory creation. Holds opaque entry records only.

pub mod entries;
pub mod file_io;
pub mod init;

pub use entries::EntryRepository;
pub use file_io::{read_json, write_json_atomic};
pub use init::initialize_storage;

use crate::config::paths::VaultPaths;
use crate::error::VaultError;

/// Main storage coordinator
pub struct Storage {
    paths: VaultPaths,
    pub entries: EntryRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: VaultPaths) -> Result<Self, VaultError> {
        paths.ensure_directories()?;

        Ok(Self {
            entries: EntryRepository::new(paths.vault_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &VaultPaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), VaultError> {
        self.entries.load()
    }
}
