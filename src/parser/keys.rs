//! Extraction of the `n` and `k` fields from the keys section.

use regex::Regex;

use crate::error::{Error, Result};
use crate::model::{Document, Keys};

const N_TOKEN: &str = "\"n\"";
const K_TOKEN: &str = "\"k\"";

/// Scans lines after the marker for the `n` and `k` fields.
pub struct KeyExtractor {
    number: Regex,
}

impl KeyExtractor {
    /// Create a new key extractor.
    pub fn new() -> Self {
        Self {
            number: Regex::new(r"-?[0-9]+").unwrap(),
        }
    }

    /// Extract `n` and `k` from the lines following `marker_line`.
    ///
    /// Each key takes the first integer on the first line mentioning it.
    /// Scanning stops as soon as both are known.
    pub fn extract(&self, doc: &Document, marker_line: usize) -> Result<Keys> {
        let mut n = None;
        let mut k = None;

        for line in doc.lines().iter().skip(marker_line + 1) {
            if n.is_none() && line.contains(N_TOKEN) {
                n = Some(self.integer(line, "n")?);
            }
            if k.is_none() && line.contains(K_TOKEN) {
                k = Some(self.integer(line, "k")?);
            }
            if let (Some(n), Some(k)) = (n, k) {
                log::debug!("Found keys n = {}, k = {}", n, k);
                return Ok(Keys { n, k });
            }
        }

        Err(Error::RequiredKeyMissing(if n.is_none() { "n" } else { "k" }))
    }

    /// First integer on the line, with an optional leading minus sign.
    fn integer(&self, line: &str, key: &'static str) -> Result<i64> {
        self.number
            .find(line)
            .and_then(|m| m.as_str().parse().ok())
            .ok_or_else(|| Error::InvalidKeyValue {
                key,
                line: line.to_string(),
            })
    }
}

impl Default for KeyExtractor {
    fn default() -> Self {
        Self::new()
    }
}
