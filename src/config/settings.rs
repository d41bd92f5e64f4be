//! User settings for passvault
//!
//! Key derivation parameters, listing defaults, and generator preferences,
//! persisted as `config.json` in the base directory.

use serde::{Deserialize, Serialize};

use super::paths::VaultPaths;
use crate::crypto::{Codec, KeyDerivationParams, DEFAULT_FALLBACK_PASSPHRASE, DEFAULT_ITERATIONS};
use crate::error::VaultError;
use crate::generator::DEFAULT_LENGTH;
use crate::index::SortOrder;

/// Key derivation settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CryptoSettings {
    /// PBKDF2 iteration count
    #[serde(default = "default_kdf_iterations")]
    pub kdf_iterations: u32,

    /// Passphrase used when none is supplied
    ///
    /// The default is public and offers no protection; it is kept so vaults
    /// written with an empty passphrase stay readable.
    #[serde(default = "default_fallback_passphrase")]
    pub fallback_passphrase: String,
}

fn default_kdf_iterations() -> u32 {
    DEFAULT_ITERATIONS
}

fn default_fallback_passphrase() -> String {
    DEFAULT_FALLBACK_PASSPHRASE.to_string()
}

impl Default for CryptoSettings {
    fn default() -> Self {
        Self {
            kdf_iterations: default_kdf_iterations(),
            fallback_passphrase: default_fallback_passphrase(),
        }
    }
}

/// Password generator settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorSettings {
    /// Default generated password length
    #[serde(default = "default_generator_length")]
    pub length: usize,
}

fn default_generator_length() -> usize {
    DEFAULT_LENGTH
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            length: default_generator_length(),
        }
    }
}

/// User settings for passvault
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Key derivation settings
    #[serde(default)]
    pub crypto: CryptoSettings,

    /// Listing order when none is given
    #[serde(default)]
    pub default_sort: SortOrder,

    /// Password generator settings
    #[serde(default)]
    pub generator: GeneratorSettings,
}

fn default_schema_version() -> u32 {
    1
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            crypto: CryptoSettings::default(),
            default_sort: SortOrder::default(),
            generator: GeneratorSettings::default(),
        }
    }
}

impl Settings {
    /// Key derivation parameters built from these settings
    pub fn key_params(&self) -> KeyDerivationParams {
        KeyDerivationParams::with_values(
            self.crypto.kdf_iterations,
            self.crypto.fallback_passphrase.clone(),
        )
    }

    /// The codec configured by these settings
    pub fn codec(&self) -> Codec {
        Codec::new(self.key_params())
    }

    /// Check the settings for values that would break the vault
    pub fn validate(&self) -> Result<(), VaultError> {
        if self.crypto.kdf_iterations == 0 {
            return Err(VaultError::Config(
                "crypto.kdf_iterations must be at least 1".into(),
            ));
        }
        if self.crypto.fallback_passphrase.is_empty() {
            return Err(VaultError::Config(
                "crypto.fallback_passphrase must not be empty".into(),
            ));
        }
        Ok(())
    }

    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &VaultPaths) -> Result<Self, VaultError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| VaultError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                VaultError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            settings.validate()?;
            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &VaultPaths) -> Result<(), VaultError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| VaultError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| VaultError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
