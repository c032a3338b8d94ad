//! Line-normalized input document.

use crate::error::{Error, Result};
use std::fs;
use std::io::Read;
use std::path::Path;

/// Characters stripped from both ends of every line.
const TRIM_CHARS: [char; 4] = [' ', '\t', '\r', '\n'];

/// An input document as an ordered sequence of trimmed, non-empty lines.
///
/// All scanning is position-relative, so line order is preserved exactly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    lines: Vec<String>,
}

impl Document {
    /// Build a document from in-memory text.
    ///
    /// # Example
    /// ```
    /// use rootdec::Document;
    ///
    /// let doc = Document::from_text("  {\n\n  \"keys\": {\r\n");
    /// assert_eq!(doc.lines(), ["{", "\"keys\": {"]);
    /// ```
    pub fn from_text(text: &str) -> Self {
        let lines = text
            .split('\n')
            .map(|line| line.trim_matches(&TRIM_CHARS[..]))
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();
        Self { lines }
    }

    /// Load a document from a file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|e| Error::source_unavailable(path.display().to_string(), e))?;
        let doc = Self::from_text(&text);
        log::debug!("Loaded {} lines from {}", doc.len(), path.display());
        Ok(doc)
    }

    /// Load a document from any reader.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut text = String::new();
        reader
            .read_to_string(&mut text)
            .map_err(|e| Error::source_unavailable("input stream", e))?;
        Ok(Self::from_text(&text))
    }

    /// All lines, in input order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Get a line by 0-based index.
    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    /// Number of non-empty lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if the document has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Index of the earliest line containing `needle`.
    pub fn find_line(&self, needle: &str) -> Option<usize> {
        self.lines.iter().position(|line| line.contains(needle))
    }
}
