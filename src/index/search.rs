//! Substring search over encrypted entries

use crate::crypto::Codec;
use crate::models::VaultEntry;

use super::try_decrypt;

fn field_contains(value: Option<&str>, needle: &str) -> bool {
    value.is_some_and(|v| v.to_lowercase().contains(needle))
}

/// Check one entry against an already-lowercased needle
///
/// The envelope is only opened when the title does not match.
fn entry_matches(codec: &Codec, entry: &VaultEntry, needle: &str, passphrase: &str) -> bool {
    if entry.title_contains(needle) {
        return true;
    }

    try_decrypt(codec, entry, passphrase)
        .map(|record| {
            field_contains(record.username(), needle) || field_contains(record.notes(), needle)
        })
        .unwrap_or(false)
}

/// Filter entries whose title, username or notes contain `query`
///
/// Case-insensitive. An empty query keeps every entry. Input order is
/// preserved. Entries that fail to decrypt can still match by title.
pub fn search_with(
    codec: &Codec,
    entries: &[VaultEntry],
    query: &str,
    passphrase: &str,
) -> Vec<VaultEntry> {
    if query.is_empty() {
        return entries.to_vec();
    }

    let needle = query.to_lowercase();
    entries
        .iter()
        .filter(|entry| entry_matches(codec, entry, &needle, passphrase))
        .cloned()
        .collect()
}

/// [`search_with`] using default key derivation parameters
pub fn search(entries: &[VaultEntry], query: &str, passphrase: &str) -> Vec<VaultEntry> {
    search_with(&Codec::default(), entries, query, passphrase)
}
