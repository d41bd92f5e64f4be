//! Core data models for passvault
//!
//! Vault entries as they are stored (title plus encrypted envelope), the
//! plaintext records they encrypt, and the drafts users submit.

pub mod entry;
pub mod ids;
pub mod record;

pub use entry::{DraftValidationError, EntryDraft, VaultEntry};
pub use ids::EntryId;
pub use record::PlaintextRecord;
