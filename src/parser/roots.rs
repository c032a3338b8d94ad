//! Root block scanner.
//!
//! Each root occupies four lines after the marker:
//!
//! ```text
//! "2": {
//! "base": "2",
//! "value": "111"
//! },
//! ```
//!
//! Lines are classified by [`classify`] and fed through a small state
//! machine. Anything outside a block is skipped; anything unexpected inside
//! a block is an error. The closer may also trail the value on the same line
//! (`"value": "111"}`), and a block left open at the end of input is kept
//! once its value has been read.

use crate::error::{Error, Result};
use crate::model::{Document, RootEntry, RootSet};

use super::tokenizer::{base_field, classify, value_field, LineKind};

/// Scanner position within a root block.
#[derive(Debug, Clone, PartialEq, Eq)]
enum State {
    ExpectLabel,
    ExpectBase { id: u64 },
    ExpectValue { id: u64, base: u32 },
    ExpectCloser(RootEntry),
}

/// Collects root entries from the lines after the marker.
#[derive(Debug, Default)]
pub struct RootExtractor;

impl RootExtractor {
    /// Create a new root extractor.
    pub fn new() -> Self {
        Self
    }

    /// Scan all lines after `marker_line` and return the root entries.
    pub fn extract(&self, doc: &Document, marker_line: usize) -> Result<RootSet> {
        let mut roots = RootSet::new();
        let mut state = State::ExpectLabel;

        for line in doc.lines().iter().skip(marker_line + 1) {
            state = self.step(state, line, &mut roots)?;
        }

        match state {
            State::ExpectLabel => {
                log::debug!("Extracted {} roots", roots.len());
                Ok(roots)
            }
            State::ExpectBase { id } | State::ExpectValue { id, .. } => {
                Err(Error::IncompleteRootBlock(id))
            }
            State::ExpectCloser(entry) => {
                Self::insert(&mut roots, entry);
                log::debug!("Extracted {} roots", roots.len());
                Ok(roots)
            }
        }
    }

    fn step(&self, state: State, line: &str, roots: &mut RootSet) -> Result<State> {
        let kind = classify(line);

        match state {
            State::ExpectLabel => match kind {
                LineKind::LabelStart(digits) => {
                    let id = digits
                        .parse()
                        .map_err(|_| Error::InvalidRootLabel(line.to_string()))?;
                    Ok(State::ExpectBase { id })
                }
                _ => Ok(State::ExpectLabel),
            },

            State::ExpectBase { id } => {
                let text = base_field(line)
                    .ok_or(Error::MissingBaseField(id))?
                    .ok_or(Error::MalformedBaseField(id))?;
                let base = text.parse().map_err(|_| Error::InvalidBase {
                    id,
                    text: text.to_string(),
                })?;
                Ok(State::ExpectValue { id, base })
            }

            State::ExpectValue { id, base } => {
                let value = value_field(line)
                    .ok_or(Error::MissingValueField(id))?
                    .ok_or(Error::MalformedValueField(id))?;
                let entry = RootEntry::new(id, base, value);
                if closes_inline(line) {
                    Self::insert(roots, entry);
                    return Ok(State::ExpectLabel);
                }
                Ok(State::ExpectCloser(entry))
            }

            State::ExpectCloser(entry) => {
                if kind != LineKind::BlockEnd {
                    return Err(Error::UnexpectedLine {
                        id: entry.id,
                        line: line.to_string(),
                    });
                }
                Self::insert(roots, entry);
                Ok(State::ExpectLabel)
            }
        }
    }

    fn insert(roots: &mut RootSet, entry: RootEntry) {
        let id = entry.id;
        if roots.insert(entry).is_some() {
            log::warn!("Root {} appears more than once, keeping the later entry", id);
        }
    }
}

/// Whether a value line also closes its block, as in `"value": "111"},`.
fn closes_inline(line: &str) -> bool {
    line.trim_end_matches(',').ends_with('}')
}
