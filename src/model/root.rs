//! Keys and root entries.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The auxiliary `n` and `k` fields from the keys section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keys {
    pub n: i64,
    pub k: i64,
}

/// A labeled numeral as written in the input, not yet decoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RootEntry {
    /// Numeric label of the entry's block
    pub id: u64,

    /// Declared radix
    pub base: u32,

    /// Digit string, verbatim
    pub value: String,
}

impl RootEntry {
    /// Create a new root entry.
    pub fn new(id: u64, base: u32, value: impl Into<String>) -> Self {
        Self {
            id,
            base,
            value: value.into(),
        }
    }
}

/// Root entries keyed by id, iterated in ascending id order.
///
/// Inserting an id that is already present replaces the earlier entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RootSet {
    entries: BTreeMap<u64, RootEntry>,
}

impl RootSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry, returning the one it replaced.
    pub fn insert(&mut self, entry: RootEntry) -> Option<RootEntry> {
        self.entries.insert(entry.id, entry)
    }

    /// Get an entry by id.
    pub fn get(&self, id: u64) -> Option<&RootEntry> {
        self.entries.get(&id)
    }

    /// Number of distinct ids.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = &RootEntry> {
        self.entries.values()
    }
}

impl<'a> IntoIterator for &'a RootSet {
    type Item = &'a RootEntry;
    type IntoIter = std::collections::btree_map::Values<'a, u64, RootEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.values()
    }
}

impl FromIterator<RootEntry> for RootSet {
    fn from_iter<I: IntoIterator<Item = RootEntry>>(iter: I) -> Self {
        let mut set = RootSet::new();
        for entry in iter {
            set.insert(entry);
        }
        set
    }
}

/// Keys and raw root entries scanned from one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extraction {
    pub keys: Keys,
    pub roots: RootSet,
}
