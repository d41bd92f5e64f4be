//! Entry display formatting
//!
//! Formats vault entries for terminal output in table and detail views.

use crate::models::{PlaintextRecord, VaultEntry};

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M";
const HIDDEN: &str = "********";

/// Format a list of entries as a table
///
/// Only metadata is shown; secrets stay encrypted.
pub fn format_entry_list(entries: &[VaultEntry]) -> String {
    if entries.is_empty() {
        return "No entries found.\n".to_string();
    }

    let title_width = entries
        .iter()
        .map(|e| e.title.chars().count())
        .max()
        .unwrap_or(5)
        .max(5);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<12}  {:<title_width$}  {:<16}  {:<16}\n",
        "ID",
        "Title",
        "Created",
        "Updated",
        title_width = title_width,
    ));

    output.push_str(&format!(
        "{:-<12}  {:-<title_width$}  {:-<16}  {:-<16}\n",
        "",
        "",
        "",
        "",
        title_width = title_width,
    ));

    for entry in entries {
        output.push_str(&format!(
            "{:<12}  {:<title_width$}  {:<16}  {:<16}\n",
            entry.id.short(),
            entry.title,
            entry.created_at.format(DATE_FORMAT).to_string(),
            entry.updated_at.format(DATE_FORMAT).to_string(),
            title_width = title_width,
        ));
    }

    let noun = if entries.len() == 1 { "entry" } else { "entries" };
    output.push_str(&format!("\n{} {}\n", entries.len(), noun));

    output
}

/// Format a single entry's details
///
/// Secrets are masked unless a decrypted record is supplied.
pub fn format_entry_details(entry: &VaultEntry, revealed: Option<&PlaintextRecord>) -> String {
    let mut output = String::new();

    output.push_str(&format!("Entry: {}\n", entry.title));
    output.push_str(&format!("  ID:        {}\n", entry.id.as_uuid()));
    output.push_str(&format!(
        "  Created:   {}\n",
        entry.created_at.format(DATE_FORMAT)
    ));
    output.push_str(&format!(
        "  Updated:   {}\n",
        entry.updated_at.format(DATE_FORMAT)
    ));

    match revealed {
        Some(record) => {
            output.push_str(&format!("  Username:  {}\n", record.username().unwrap_or("")));
            output.push_str(&format!("  Password:  {}\n", record.password().unwrap_or("")));
            if let Some(notes) = record.notes().filter(|n| !n.is_empty()) {
                output.push_str(&format!("  Notes:     {}\n", notes));
            }
        }
        None => {
            output.push_str(&format!("  Username:  {}\n", HIDDEN));
            output.push_str(&format!("  Password:  {}\n", HIDDEN));
            output.push_str("\nUse --reveal to decrypt.\n");
        }
    }

    output
}
