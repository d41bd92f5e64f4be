//! Display formatting for terminal output

pub mod entry;

pub use entry::{format_entry_details, format_entry_list};
