//! Cryptographic functions for passvault
//!
//! Envelope encryption: every vault entry's sensitive fields are encrypted
//! with AES-256-CBC under a key stretched from the passphrase with
//! PBKDF2-HMAC-SHA256 and a per-envelope random salt.

pub mod encryption;
pub mod key_derivation;
pub mod secure_memory;

pub use encryption::{decrypt, encrypt, Codec, EncryptedEnvelope, IV_SIZE};
pub use key_derivation::{
    derive_key, DerivedKey, KeyDerivationParams, DEFAULT_FALLBACK_PASSPHRASE,
    DEFAULT_ITERATIONS, KEY_SIZE, SALT_SIZE,
};
pub use secure_memory::Passphrase;
