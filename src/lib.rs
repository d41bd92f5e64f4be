//! passvault - password vault with per-entry envelope encryption
//!
//! Each entry keeps its title in plaintext and seals its username, password
//! and notes in an envelope: PBKDF2-SHA256 key derivation with a fresh salt,
//! then AES-256-CBC with a fresh IV. The store only ever holds envelopes, so
//! searching and sorting on sensitive fields happens client-side.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `crypto`: Envelope codec and passphrase handling
//! - `index`: Search and sort over encrypted entries
//! - `models`: Entries, drafts, and plaintext records
//! - `storage`: JSON file storage layer
//! - `services`: Business logic layer
//! - `config`: Paths and settings
//! - `export`: JSON, YAML, and CSV export
//! - `cli` / `display`: Command handlers and terminal formatting
//!
//! # Example
//!
//! ```rust,ignore
//! use passvault::crypto::{decrypt, encrypt};
//! use passvault::models::PlaintextRecord;
//!
//! let record = PlaintextRecord::credentials("alice", "hunter2", "");
//! let envelope = encrypt(&record, "correct horse")?;
//! assert_eq!(decrypt(&envelope, "correct horse")?, record);
//! ```

pub mod cli;
pub mod config;
pub mod crypto;
pub mod display;
pub mod error;
pub mod export;
pub mod generator;
pub mod index;
pub mod logging;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{VaultError, VaultResult};
