//! # rootdec
//!
//! Extract keyed numeral roots from loosely JSON-shaped text and decode them
//! to decimal.
//!
//! The input is scanned line by line rather than parsed as JSON. A marker
//! line (`"keys"`) anchors the scan; `n` and `k` are read from the lines
//! after it, followed by root blocks of the shape
//!
//! ```text
//! "2": {
//!     "base": "2",
//!     "value": "111"
//! }
//! ```
//!
//! ## Quick Start
//!
//! ```no_run
//! use rootdec::{decode_file, render};
//!
//! fn main() -> rootdec::Result<()> {
//!     let report = decode_file("input.json")?;
//!     print!("{}", render::to_text(&report));
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod model;
pub mod numeral;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use error::{Error, Result};
pub use model::{DecodedRoot, Document, Extraction, Keys, Report, RootEntry, RootSet};
pub use parser::{ParseOptions, RootParser};
pub use render::JsonFormat;

use std::io::Read;
use std::path::Path;

/// Scan a file for keys and root entries without decoding them.
///
/// # Example
///
/// ```no_run
/// use rootdec::parse_file;
///
/// let extraction = parse_file("input.json").unwrap();
/// println!("{} roots", extraction.roots.len());
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Extraction> {
    RootParser::open(path)?.parse()
}

/// Scan a file with custom options.
pub fn parse_file_with_options<P: AsRef<Path>>(
    path: P,
    options: ParseOptions,
) -> Result<Extraction> {
    RootParser::open_with_options(path, options)?.parse()
}

/// Scan in-memory text.
pub fn parse_str(text: &str) -> Result<Extraction> {
    RootParser::from_text(text).parse()
}

/// Scan text read from a reader.
pub fn parse_reader<R: Read>(reader: R) -> Result<Extraction> {
    RootParser::from_reader(reader)?.parse()
}

/// Scan a file and decode every root.
///
/// # Example
///
/// ```no_run
/// use rootdec::decode_file;
///
/// let report = decode_file("input.json").unwrap();
/// for root in &report.roots {
///     println!("{} -> {}", root.id, root.decimal);
/// }
/// ```
pub fn decode_file<P: AsRef<Path>>(path: P) -> Result<Report> {
    let extraction = parse_file(path)?;
    Report::build(extraction.keys, &extraction.roots)
}

/// Scan in-memory text and decode every root.
///
/// # Example
///
/// ```
/// let report = rootdec::decode_str(
///     "\"keys\": {\n\"n\": 1,\n\"k\": 1\n},\n\"1\": {\n\"base\": \"16\",\n\"value\": \"1A\"\n}\n",
/// )
/// .unwrap();
/// assert_eq!(report.roots[0].decimal, 26);
/// ```
pub fn decode_str(text: &str) -> Result<Report> {
    let extraction = parse_str(text)?;
    Report::build(extraction.keys, &extraction.roots)
}

/// Decode a file and render it as plain text.
pub fn to_text<P: AsRef<Path>>(path: P) -> Result<String> {
    let report = decode_file(path)?;
    Ok(render::to_text(&report))
}

/// Decode a file and render it as JSON.
pub fn to_json<P: AsRef<Path>>(path: P, format: JsonFormat) -> Result<String> {
    let report = decode_file(path)?;
    render::to_json(&report, format)
}

/// Builder for scanning and decoding root documents.
///
/// # Example
///
/// ```no_run
/// use rootdec::RootDecoder;
///
/// let text = RootDecoder::new()
///     .with_marker("keys")
///     .decode("input.json")?
///     .to_text();
/// # Ok::<(), rootdec::Error>(())
/// ```
pub struct RootDecoder {
    parse_options: ParseOptions,
}

impl RootDecoder {
    /// Create a new decoder builder.
    pub fn new() -> Self {
        Self {
            parse_options: ParseOptions::default(),
        }
    }

    /// Set the section marker name.
    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.parse_options = self.parse_options.with_marker(marker);
        self
    }

    /// Scan and decode a file.
    pub fn decode<P: AsRef<Path>>(self, path: P) -> Result<DecodeResult> {
        let parser = RootParser::open_with_options(path, self.parse_options)?;
        Self::finish(&parser)
    }

    /// Scan and decode text read from a reader.
    pub fn decode_reader<R: Read>(self, reader: R) -> Result<DecodeResult> {
        let parser = RootParser::from_reader_with_options(reader, self.parse_options)?;
        Self::finish(&parser)
    }

    fn finish(parser: &RootParser) -> Result<DecodeResult> {
        let extraction = parser.parse()?;
        let report = Report::build(extraction.keys, &extraction.roots)?;
        Ok(DecodeResult { report })
    }
}

impl Default for RootDecoder {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of decoding a root document.
pub struct DecodeResult {
    /// The decoded report
    pub report: Report,
}

impl DecodeResult {
    /// Convert to plain text.
    pub fn to_text(&self) -> String {
        render::to_text(&self.report)
    }

    /// Convert to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.report, format)
    }

    /// Get the report.
    pub fn report(&self) -> &Report {
        &self.report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "{\n\"keys\": {\n\"n\": 4,\n\"k\": 3\n},\n\"1\": {\n\"base\": \"10\",\n\"value\": \"4\"\n},\n\"2\": {\n\"base\": \"2\",\n\"value\": \"111\"\n}\n}\n";

    #[test]
    fn test_decode_str() {
        let report = decode_str(SAMPLE).unwrap();
        assert_eq!(report.keys, Keys { n: 4, k: 3 });
        assert_eq!(report.root(1).unwrap().decimal, 4);
        assert_eq!(report.root(2).unwrap().decimal, 7);
    }

    #[test]
    fn test_parse_reader() {
        let extraction = parse_reader(SAMPLE.as_bytes()).unwrap();
        assert_eq!(extraction.roots.len(), 2);
    }

    #[test]
    fn test_decoder_builder_default() {
        let builder = RootDecoder::default();
        assert_eq!(builder.parse_options.marker, "keys");
    }

    #[test]
    fn test_decoder_builder_with_marker() {
        let builder = RootDecoder::new().with_marker("meta");
        assert_eq!(builder.parse_options.marker, "meta");
    }

    #[test]
    fn test_decoder_builder_reader() {
        let result = RootDecoder::new().decode_reader(SAMPLE.as_bytes()).unwrap();
        assert!(result.to_text().contains("Root ID 2: base = 2, value = 111, decimal = 7"));
        assert_eq!(result.report().roots.len(), 2);
    }

    // ==================== Edge Case Tests ====================

    #[test]
    fn test_decode_str_empty_input() {
        assert!(matches!(decode_str(""), Err(Error::MarkerNotFound(_))));
    }

    #[test]
    fn test_decode_str_stops_at_bad_digit() {
        let text = SAMPLE.replace("\"111\"", "\"129\"");
        assert!(matches!(
            decode_str(&text),
            Err(Error::DigitOutOfRangeForBase {
                digit: '2',
                base: 2
            })
        ));
    }

    #[test]
    fn test_decode_file_missing() {
        assert!(matches!(
            decode_file("no/such/dir/input.json"),
            Err(Error::SourceUnavailable { .. })
        ));
    }
}
