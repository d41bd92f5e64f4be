//! Client-side search and ordering over encrypted entries
//!
//! The store only sees ciphertext, so filtering and sorting on sensitive
//! fields happens here, against a snapshot of entries. Nothing is cached
//! between calls; callers re-run the index after every mutation.
//!
//! A decryption failure never escapes this module. It is folded into
//! "no match" for search and "keep in place" for username sorting, so one
//! corrupted entry cannot break a whole listing.

pub mod order;
pub mod search;
pub mod sort;

pub use order::{SortDirection, SortField, SortOrder};
pub use search::{search, search_with};
pub use sort::{sort, sort_with};

use crate::crypto::Codec;
use crate::models::{PlaintextRecord, VaultEntry};

/// Decrypt an entry for indexing, logging and discarding failures
pub(crate) fn try_decrypt(
    codec: &Codec,
    entry: &VaultEntry,
    passphrase: &str,
) -> Option<PlaintextRecord> {
    match codec.decrypt(&entry.envelope, passphrase) {
        Ok(record) => Some(record),
        Err(err) => {
            tracing::warn!(entry = %entry.id, error = %err, "skipping undecryptable entry");
            None
        }
    }
}

/// Search and sort bound to one codec configuration
#[derive(Debug, Clone, Copy)]
pub struct VaultIndex<'a> {
    codec: &'a Codec,
}

impl<'a> VaultIndex<'a> {
    /// Create an index that decrypts with `codec`
    pub fn new(codec: &'a Codec) -> Self {
        Self { codec }
    }

    /// Keep entries whose title, username or notes contain `query`,
    /// ignoring case. An empty query keeps everything.
    pub fn search(&self, entries: &[VaultEntry], query: &str, passphrase: &str) -> Vec<VaultEntry> {
        search_with(self.codec, entries, query, passphrase)
    }

    /// Return the entries ordered by `order`; ties keep their input order
    pub fn sort(&self, entries: &[VaultEntry], order: SortOrder, passphrase: &str) -> Vec<VaultEntry> {
        sort_with(self.codec, entries, order.field, order.direction, passphrase)
    }

    /// Filter by `query`, then order the survivors
    pub fn filter_and_sort(
        &self,
        entries: &[VaultEntry],
        query: &str,
        order: SortOrder,
        passphrase: &str,
    ) -> Vec<VaultEntry> {
        let filtered = self.search(entries, query, passphrase);
        self.sort(&filtered, order, passphrase)
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use base64::{engine::general_purpose::STANDARD, Engine};

    use crate::crypto::encrypt;
    use crate::models::{PlaintextRecord, VaultEntry};

    /// Entry encrypted under the empty passphrase
    pub fn entry(title: &str, username: &str, notes: &str) -> VaultEntry {
        let record = PlaintextRecord::credentials(username, "secret", notes);
        VaultEntry::new(title, encrypt(&record, "").unwrap())
    }

    /// Entry whose ciphertext is garbage
    pub fn corrupted(title: &str) -> VaultEntry {
        let mut e = entry(title, "ghost", "");
        e.envelope.ciphertext = STANDARD.encode(b"this is not what was encrypted!!");
        e
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::{corrupted, entry};
    use super::*;

    #[test]
    fn test_filter_and_sort() {
        let codec = Codec::default();
        let index = VaultIndex::new(&codec);
        let entries = vec![
            entry("Work email", "bob", ""),
            entry("Bank", "alice", "shared with bob"),
            corrupted("Bob's router"),
            entry("Forum", "carol", ""),
        ];

        let order = SortOrder::new(SortField::Title, SortDirection::Asc);
        let result = index.filter_and_sort(&entries, "bob", order, "");
        let titles: Vec<_> = result.iter().map(|e| e.title.as_str()).collect();

        assert_eq!(titles, vec!["Bank", "Bob's router", "Work email"]);
    }

    #[test]
    fn test_index_respects_codec_params() {
        use crate::crypto::KeyDerivationParams;

        let custom = Codec::new(KeyDerivationParams::with_values(1000, "other-fallback"));
        let index = VaultIndex::new(&custom);
        let entries = vec![entry("Bank", "alice", "")];

        // Encrypted under the default fallback, so the custom codec cannot read it
        assert!(index.search(&entries, "alice", "").is_empty());
        assert_eq!(index.search(&entries, "bank", "").len(), 1);
    }
}
