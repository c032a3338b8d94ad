//! Decoded results.

use super::{Keys, RootEntry, RootSet};
use crate::error::Result;
use crate::numeral;
use serde::{Deserialize, Serialize};

/// A root entry together with its decimal value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodedRoot {
    pub id: u64,
    pub base: u32,
    pub value: String,
    pub decimal: u64,
}

impl DecodedRoot {
    /// Decode an entry's digit string in its declared base.
    pub fn decode(entry: &RootEntry) -> Result<Self> {
        let decimal = numeral::decode(&entry.value, entry.base)?;
        Ok(Self {
            id: entry.id,
            base: entry.base,
            value: entry.value.clone(),
            decimal,
        })
    }
}

/// Everything the renderers print: the keys and every decoded root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub keys: Keys,
    pub roots: Vec<DecodedRoot>,
}

impl Report {
    /// Decode all roots, stopping at the first failure.
    ///
    /// Roots keep the set's ascending id order.
    pub fn build(keys: Keys, roots: &RootSet) -> Result<Self> {
        let roots = roots
            .iter()
            .map(DecodedRoot::decode)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { keys, roots })
    }

    /// Get a decoded root by id.
    pub fn root(&self, id: u64) -> Option<&DecodedRoot> {
        self.roots.iter().find(|r| r.id == id)
    }
}
