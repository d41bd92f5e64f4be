//! AES-256-CBC envelope encryption
//!
//! Turns a [`PlaintextRecord`] into an [`EncryptedEnvelope`] and back. Every
//! encryption draws a fresh salt and IV, so no two envelopes share key
//! material even when they carry the same secret.

use aes::cipher::{block_padding::Pkcs7, BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use base64::{engine::general_purpose::STANDARD, Engine};
use rand::{rngs::OsRng, RngCore};
use serde::{Deserialize, Serialize};
use zeroize::Zeroize;

use crate::error::{VaultError, VaultResult};
use crate::models::PlaintextRecord;

use super::key_derivation::{derive_key, DerivedKey, KeyDerivationParams, SALT_SIZE};

type Aes256CbcEnc = cbc::Encryptor<aes::Aes256>;
type Aes256CbcDec = cbc::Decryptor<aes::Aes256>;

/// Size of the CBC initialization vector in bytes
pub const IV_SIZE: usize = 16;

/// AES block size in bytes
const BLOCK_SIZE: usize = 16;

/// One encrypted record as it is stored and transmitted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncryptedEnvelope {
    /// The encrypted record (base64 encoded)
    #[serde(alias = "encryptedData")]
    pub ciphertext: String,
    /// The IV used for this encryption (hex encoded)
    pub iv: String,
    /// The key-derivation salt for this envelope (hex encoded)
    pub salt: String,
}

impl EncryptedEnvelope {
    fn new(ciphertext: &[u8], iv: &[u8; IV_SIZE], salt: &[u8; SALT_SIZE]) -> Self {
        Self {
            ciphertext: STANDARD.encode(ciphertext),
            iv: hex::encode(iv),
            salt: hex::encode(salt),
        }
    }

    /// Check that iv and salt are well-formed and the ciphertext is a whole
    /// number of blocks, without attempting decryption
    pub fn validate_shape(&self) -> Result<(), String> {
        decode_hex::<IV_SIZE>(&self.iv).ok_or_else(|| "iv must be 32 hex characters".to_string())?;
        decode_hex::<SALT_SIZE>(&self.salt)
            .ok_or_else(|| "salt must be 32 hex characters".to_string())?;

        let ciphertext = STANDARD
            .decode(&self.ciphertext)
            .map_err(|e| format!("ciphertext is not valid base64: {}", e))?;
        if ciphertext.is_empty() || ciphertext.len() % BLOCK_SIZE != 0 {
            return Err(format!(
                "ciphertext length {} is not a positive multiple of {}",
                ciphertext.len(),
                BLOCK_SIZE
            ));
        }
        Ok(())
    }
}

fn decode_hex<const N: usize>(s: &str) -> Option<[u8; N]> {
    hex::decode(s).ok()?.try_into().ok()
}

/// Envelope encryption keyed by passphrase, with configurable key derivation
#[derive(Debug, Clone, Default)]
pub struct Codec {
    params: KeyDerivationParams,
}

impl Codec {
    /// Create a codec with specific key derivation parameters
    pub fn new(params: KeyDerivationParams) -> Self {
        Self { params }
    }

    /// Get the key derivation parameters
    pub fn params(&self) -> &KeyDerivationParams {
        &self.params
    }

    /// Derive the key for a passphrase and salt under this codec's params
    pub fn derive_key(&self, passphrase: &str, salt: &[u8; SALT_SIZE]) -> DerivedKey {
        derive_key(passphrase, salt, &self.params)
    }

    /// Encrypt a record under a passphrase
    ///
    /// Generates a random salt and IV for every call.
    pub fn encrypt(
        &self,
        record: &PlaintextRecord,
        passphrase: &str,
    ) -> VaultResult<EncryptedEnvelope> {
        let mut plaintext = serde_json::to_vec(record)
            .map_err(|e| VaultError::Encoding(format!("Failed to serialize record: {}", e)))?;

        let mut salt = [0u8; SALT_SIZE];
        let mut iv = [0u8; IV_SIZE];
        OsRng.fill_bytes(&mut salt);
        OsRng.fill_bytes(&mut iv);

        let key = self.derive_key(passphrase, &salt);
        let ciphertext = Aes256CbcEnc::new(key.as_bytes().into(), (&iv).into())
            .encrypt_padded_vec_mut::<Pkcs7>(&plaintext);
        plaintext.zeroize();

        tracing::debug!(
            fields = record.len(),
            ciphertext_len = ciphertext.len(),
            "encrypted record"
        );

        Ok(EncryptedEnvelope::new(&ciphertext, &iv, &salt))
    }

    /// Decrypt an envelope under a passphrase
    ///
    /// Every failure maps to [`VaultError::Decryption`]; the specific cause
    /// is only logged at debug level.
    pub fn decrypt(
        &self,
        envelope: &EncryptedEnvelope,
        passphrase: &str,
    ) -> VaultResult<PlaintextRecord> {
        self.open(envelope, passphrase).map_err(|cause| {
            tracing::debug!(%cause, "decryption failed");
            VaultError::Decryption
        })
    }

    fn open(&self, envelope: &EncryptedEnvelope, passphrase: &str) -> Result<PlaintextRecord, String> {
        let salt = decode_hex::<SALT_SIZE>(&envelope.salt).ok_or("malformed salt")?;
        let iv = decode_hex::<IV_SIZE>(&envelope.iv).ok_or("malformed iv")?;
        let ciphertext = STANDARD
            .decode(&envelope.ciphertext)
            .map_err(|e| format!("malformed ciphertext encoding: {}", e))?;

        let key = self.derive_key(passphrase, &salt);
        let mut plaintext = Aes256CbcDec::new(key.as_bytes().into(), (&iv).into())
            .decrypt_padded_vec_mut::<Pkcs7>(&ciphertext)
            .map_err(|_| "invalid padding".to_string())?;

        let record = serde_json::from_slice::<PlaintextRecord>(&plaintext)
            .map_err(|e| format!("decrypted payload is not a record: {}", e));
        plaintext.zeroize();
        record
    }
}

/// Encrypt a record with default key derivation parameters
pub fn encrypt(record: &PlaintextRecord, passphrase: &str) -> VaultResult<EncryptedEnvelope> {
    Codec::default().encrypt(record, passphrase)
}

/// Decrypt an envelope with default key derivation parameters
pub fn decrypt(envelope: &EncryptedEnvelope, passphrase: &str) -> VaultResult<PlaintextRecord> {
    Codec::default().decrypt(envelope, passphrase)
}
