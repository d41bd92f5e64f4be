//! Stable ordering of vault entries

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::crypto::Codec;
use crate::models::VaultEntry;

use super::order::{SortDirection, SortField};
use super::try_decrypt;

/// Comparison key approximating root-locale collation
///
/// Compared level by level: base letters with accents stripped and case
/// folded, then accents, then the raw text. "Éclair" therefore sorts between
/// "apple" and "Zebra", and "eclair" just before "Éclair".
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct CollationKey {
    base: String,
    accented: String,
    raw: String,
}

impl CollationKey {
    fn new(text: &str) -> Self {
        Self {
            base: text
                .nfd()
                .filter(|c| !is_combining_mark(*c))
                .flat_map(char::to_lowercase)
                .collect(),
            accented: text.nfd().flat_map(char::to_lowercase).collect(),
            raw: text.to_string(),
        }
    }
}

/// Sort entries by `field` in `direction`
///
/// The sort is stable in both directions: `Desc` reverses the comparator,
/// not the output, so ties keep their input order.
///
/// Sorting by username decrypts each entry once up front. Entries that fail
/// to decrypt stay at their input positions while the rest are sorted into
/// the remaining slots.
pub fn sort_with(
    codec: &Codec,
    entries: &[VaultEntry],
    field: SortField,
    direction: SortDirection,
    passphrase: &str,
) -> Vec<VaultEntry> {
    match field {
        SortField::CreatedAt | SortField::UpdatedAt => {
            let mut sorted = entries.to_vec();
            sorted.sort_by(|a, b| {
                let ordering = if field == SortField::CreatedAt {
                    a.created_at.cmp(&b.created_at)
                } else {
                    a.updated_at.cmp(&b.updated_at)
                };
                direction.apply(ordering)
            });
            sorted
        }
        SortField::Title => {
            let keys = entries
                .iter()
                .map(|entry| Some(CollationKey::new(&entry.title)))
                .collect();
            reorder(entries, keys, direction)
        }
        SortField::Username => {
            let keys = entries
                .iter()
                .map(|entry| {
                    try_decrypt(codec, entry, passphrase)
                        .map(|record| CollationKey::new(record.username().unwrap_or_default()))
                })
                .collect();
            reorder(entries, keys, direction)
        }
    }
}

/// Stable decorate-sort-undecorate
///
/// Entries with a `None` key are pinned to their input position.
fn reorder(
    entries: &[VaultEntry],
    keys: Vec<Option<CollationKey>>,
    direction: SortDirection,
) -> Vec<VaultEntry> {
    let mut movable: Vec<(usize, CollationKey)> = keys
        .into_iter()
        .enumerate()
        .filter_map(|(i, key)| key.map(|k| (i, k)))
        .collect();
    let slots: Vec<usize> = movable.iter().map(|(i, _)| *i).collect();

    movable.sort_by(|(_, a), (_, b)| direction.apply(a.cmp(b)));

    let mut sorted = entries.to_vec();
    for (slot, (source, _)) in slots.into_iter().zip(movable) {
        sorted[slot] = entries[source].clone();
    }
    sorted
}

/// [`sort_with`] using default key derivation parameters
pub fn sort(
    entries: &[VaultEntry],
    field: SortField,
    direction: SortDirection,
    passphrase: &str,
) -> Vec<VaultEntry> {
    sort_with(&Codec::default(), entries, field, direction, passphrase)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::test_support::{corrupted, entry};
    use chrono::{TimeZone, Utc};

    fn titles(entries: &[VaultEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.title.as_str()).collect()
    }

    fn dated(title: &str, day: u32) -> VaultEntry {
        let mut e = entry(title, "user", "");
        e.created_at = Utc.with_ymd_and_hms(2024, 1, day, 12, 0, 0).unwrap();
        e.updated_at = Utc.with_ymd_and_hms(2024, 2, 20 - day, 12, 0, 0).unwrap();
        e
    }

    #[test]
    fn test_sort_created_at() {
        let entries = vec![dated("b", 2), dated("a", 1), dated("c", 3)];

        let asc = sort(&entries, SortField::CreatedAt, SortDirection::Asc, "");
        assert_eq!(titles(&asc), vec!["a", "b", "c"]);

        let desc = sort(&entries, SortField::CreatedAt, SortDirection::Desc, "");
        assert_eq!(titles(&desc), vec!["c", "b", "a"]);
    }

    #[test]
    fn test_sort_updated_at() {
        // updated_at runs opposite to created_at in the fixture
        let entries = vec![dated("b", 2), dated("a", 1), dated("c", 3)];
        let asc = sort(&entries, SortField::UpdatedAt, SortDirection::Asc, "");
        assert_eq!(titles(&asc), vec!["c", "b", "a"]);
    }

    #[test]
    fn test_equal_created_at_is_stable_desc() {
        let mut entries = vec![dated("first", 5), dated("second", 5), dated("third", 5)];
        entries.push(dated("older", 1));
        entries.push(dated("fourth", 5));

        let desc = sort(&entries, SortField::CreatedAt, SortDirection::Desc, "");
        assert_eq!(titles(&desc), vec!["first", "second", "third", "fourth", "older"]);

        let asc = sort(&entries, SortField::CreatedAt, SortDirection::Asc, "");
        assert_eq!(titles(&asc), vec!["older", "first", "second", "third", "fourth"]);
    }

    #[test]
    fn test_sort_title_case_insensitive() {
        let entries = vec![
            entry("banana", "u", ""),
            entry("Apple", "u", ""),
            entry("cherry", "u", ""),
        ];

        let asc = sort(&entries, SortField::Title, SortDirection::Asc, "");
        assert_eq!(titles(&asc), vec!["Apple", "banana", "cherry"]);

        let desc = sort(&entries, SortField::Title, SortDirection::Desc, "");
        assert_eq!(titles(&desc), vec!["cherry", "banana", "Apple"]);
    }

    #[test]
    fn test_sort_title_accents_collate_with_base_letter() {
        let entries = vec![
            entry("Zebra", "u", ""),
            entry("Éclair", "u", ""),
            entry("apple", "u", ""),
            entry("eclair", "u", ""),
        ];

        let asc = sort(&entries, SortField::Title, SortDirection::Asc, "");
        assert_eq!(titles(&asc), vec!["apple", "eclair", "Éclair", "Zebra"]);

        let desc = sort(&entries, SortField::Title, SortDirection::Desc, "");
        assert_eq!(titles(&desc), vec!["Zebra", "Éclair", "eclair", "apple"]);
    }

    #[test]
    fn test_sort_username_accents_collate_with_base_letter() {
        let entries = vec![
            entry("one", "zoë", ""),
            entry("two", "Émile", ""),
            entry("three", "adam", ""),
            entry("four", "Örjan", ""),
        ];

        let asc = sort(&entries, SortField::Username, SortDirection::Asc, "");
        assert_eq!(titles(&asc), vec!["three", "two", "four", "one"]);
    }

    #[test]
    fn test_sort_title_ties_keep_order() {
        let a = entry("Same", "u", "");
        let b = entry("Same", "v", "");
        let (a_id, b_id) = (a.id, b.id);

        let desc = sort(&[a, b], SortField::Title, SortDirection::Desc, "");
        assert_eq!(desc[0].id, a_id);
        assert_eq!(desc[1].id, b_id);
    }

    #[test]
    fn test_sort_username() {
        let entries = vec![
            entry("one", "carol", ""),
            entry("two", "alice", ""),
            entry("three", "Bob", ""),
        ];

        let asc = sort(&entries, SortField::Username, SortDirection::Asc, "");
        assert_eq!(titles(&asc), vec!["two", "three", "one"]);

        let desc = sort(&entries, SortField::Username, SortDirection::Desc, "");
        assert_eq!(titles(&desc), vec!["one", "three", "two"]);
    }

    #[test]
    fn test_sort_username_pins_undecryptable_entries() {
        let entries = vec![
            entry("z-user", "zed", ""),
            corrupted("broken"),
            entry("a-user", "amy", ""),
            entry("m-user", "max", ""),
        ];

        let asc = sort(&entries, SortField::Username, SortDirection::Asc, "");
        assert_eq!(titles(&asc), vec!["a-user", "broken", "m-user", "z-user"]);
    }

    #[test]
    fn test_sort_username_wrong_passphrase_keeps_order() {
        let entries = vec![entry("z", "zed", ""), entry("a", "amy", "")];
        let sorted = sort(&entries, SortField::Username, SortDirection::Asc, "wrong");
        assert_eq!(titles(&sorted), vec!["z", "a"]);
    }

    #[test]
    fn test_sort_empty() {
        assert!(sort(&[], SortField::Username, SortDirection::Desc, "").is_empty());
    }
}
