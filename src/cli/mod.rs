//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod entry;
pub mod export;
pub mod generate;
pub mod passphrase;

pub use entry::{handle_entry_command, EntryCommands};
pub use export::{handle_export_command, ExportFormat};
pub use generate::handle_generate_command;
pub use passphrase::{PassphraseSource, PASSPHRASE_ENV};
