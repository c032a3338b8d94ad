//! Document-level parser tying the marker search, key and root scans together.

use std::io::Read;
use std::path::Path;

use crate::error::{Error, Result};
use crate::model::{Document, Extraction};

use super::keys::KeyExtractor;
use super::options::ParseOptions;
use super::roots::RootExtractor;

/// Parser for a keys-and-roots document.
pub struct RootParser {
    doc: Document,
    options: ParseOptions,
}

impl RootParser {
    /// Open a document file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with_options(path, ParseOptions::default())
    }

    /// Open a document file with custom options.
    pub fn open_with_options<P: AsRef<Path>>(path: P, options: ParseOptions) -> Result<Self> {
        let doc = Document::load(path)?;
        Ok(Self::with_document(doc, options))
    }

    /// Parse a document held in memory.
    pub fn from_text(text: &str) -> Self {
        Self::with_document(Document::from_text(text), ParseOptions::default())
    }

    /// Parse a document read from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Self::from_reader_with_options(reader, ParseOptions::default())
    }

    /// Parse a document read from a reader with custom options.
    pub fn from_reader_with_options<R: Read>(reader: R, options: ParseOptions) -> Result<Self> {
        let doc = Document::from_reader(reader)?;
        Ok(Self::with_document(doc, options))
    }

    /// Wrap an already loaded document.
    pub fn with_document(doc: Document, options: ParseOptions) -> Self {
        Self { doc, options }
    }

    /// The loaded document.
    pub fn document(&self) -> &Document {
        &self.doc
    }

    /// Index of the marker line.
    pub fn marker_line(&self) -> Result<usize> {
        self.doc
            .find_line(&self.options.quoted_marker())
            .ok_or_else(|| Error::MarkerNotFound(self.options.marker.clone()))
    }

    /// Scan the document for keys and root entries.
    pub fn parse(&self) -> Result<Extraction> {
        let marker = self.marker_line()?;
        log::debug!("Found marker \"{}\" at line {}", self.options.marker, marker);

        let keys = KeyExtractor::new().extract(&self.doc, marker)?;
        let roots = RootExtractor::new().extract(&self.doc, marker)?;

        Ok(Extraction { keys, roots })
    }
}
