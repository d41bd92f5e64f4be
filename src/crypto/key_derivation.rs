//! Key derivation using PBKDF2-HMAC-SHA256
//!
//! Stretches a passphrase and a per-envelope salt into a 256-bit AES key.

use pbkdf2::pbkdf2_hmac;
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Size of the per-envelope salt in bytes
pub const SALT_SIZE: usize = 16;

/// Size of the derived key in bytes (AES-256)
pub const KEY_SIZE: usize = 32;

/// Default PBKDF2 iteration count
pub const DEFAULT_ITERATIONS: u32 = 10_000;

/// Passphrase substituted when the caller supplies an empty one.
///
/// INSECURE: this value is public, so an empty passphrase offers no
/// protection at all. It exists only so vaults written by older clients,
/// which always passed an empty passphrase, remain readable.
pub const DEFAULT_FALLBACK_PASSPHRASE: &str = "DEFAULT_ENCRYPTION_KEY";

/// Parameters for key derivation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyDerivationParams {
    /// PBKDF2 iteration count
    pub iterations: u32,
    /// Passphrase used in place of an empty one
    pub fallback_passphrase: String,
}

impl Default for KeyDerivationParams {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            fallback_passphrase: DEFAULT_FALLBACK_PASSPHRASE.to_string(),
        }
    }
}

impl KeyDerivationParams {
    /// Create params with specific values
    pub fn with_values(iterations: u32, fallback_passphrase: impl Into<String>) -> Self {
        Self {
            iterations,
            fallback_passphrase: fallback_passphrase.into(),
        }
    }

    /// The passphrase that is actually fed to PBKDF2
    fn effective_passphrase<'a>(&'a self, passphrase: &'a str) -> &'a str {
        if passphrase.is_empty() {
            tracing::debug!("empty passphrase, deriving key from fallback constant");
            &self.fallback_passphrase
        } else {
            passphrase
        }
    }
}

/// A derived encryption key, wiped from memory on drop
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct DerivedKey {
    key: [u8; KEY_SIZE],
}

impl DerivedKey {
    /// Get the key bytes
    pub fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.key
    }
}

impl std::fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("DerivedKey([REDACTED])")
    }
}

/// Derive an encryption key from a passphrase and salt
///
/// Deterministic: the same passphrase, salt and params always yield the same
/// key. An empty passphrase is replaced by `params.fallback_passphrase`.
pub fn derive_key(
    passphrase: &str,
    salt: &[u8; SALT_SIZE],
    params: &KeyDerivationParams,
) -> DerivedKey {
    let password = params.effective_passphrase(passphrase);

    let mut key = [0u8; KEY_SIZE];
    pbkdf2_hmac::<Sha256>(password.as_bytes(), salt, params.iterations, &mut key);

    DerivedKey { key }
}
