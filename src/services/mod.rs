//! Business logic layer for passvault
//!
//! Services sit between the CLI and storage, encrypting on the way in and
//! decrypting on the way out.

pub mod entry;

pub use entry::EntryService;
