//! Error types for rootdec library.

use std::io;
use thiserror::Error;

/// Result type alias for rootdec operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while loading, scanning, or decoding a document.
#[derive(Error, Debug)]
pub enum Error {
    /// The input could not be opened or read.
    #[error("Could not read {source_name}: {source}")]
    SourceUnavailable {
        source_name: String,
        #[source]
        source: io::Error,
    },

    /// No line contains the section marker.
    #[error("No \"{0}\" marker found in input")]
    MarkerNotFound(String),

    /// `n` or `k` was not found before the end of the document.
    #[error("Could not find required key \"{0}\" in input")]
    RequiredKeyMissing(&'static str),

    /// A key line was found but carries no usable integer.
    #[error("Invalid value for key \"{key}\" in line: {line}")]
    InvalidKeyValue { key: &'static str, line: String },

    /// A root label line carries an id that does not fit an unsigned integer.
    #[error("Invalid root label: {0}")]
    InvalidRootLabel(String),

    /// The input ended inside a root block.
    #[error("Input incomplete for root {0}")]
    IncompleteRootBlock(u64),

    /// The line after a root label is not a base field.
    #[error("Missing base for root {0}")]
    MissingBaseField(u64),

    /// The base field has no quoted value.
    #[error("Malformed base line for root {0}")]
    MalformedBaseField(u64),

    /// The quoted base is not a plain decimal integer.
    #[error("Invalid base \"{text}\" for root {id}")]
    InvalidBase { id: u64, text: String },

    /// The line after a base field is not a value field.
    #[error("Missing value for root {0}")]
    MissingValueField(u64),

    /// The value field has no quoted value.
    #[error("Malformed value line for root {0}")]
    MalformedValueField(u64),

    /// A root block was not closed where a closing brace was expected.
    #[error("Unexpected line in root {id}: {line}")]
    UnexpectedLine { id: u64, line: String },

    /// A character is not a digit in any supported base.
    #[error("Invalid digit character: {0}")]
    InvalidDigitCharacter(char),

    /// A digit is valid in general but too large for the declared base.
    #[error("Digit {digit} invalid for base {base}")]
    DigitOutOfRangeForBase { digit: char, base: u32 },

    /// The decoded value does not fit in 64 bits.
    #[error("Value {value} in base {base} overflows 64-bit decimal")]
    NumeralOverflow { value: String, base: u32 },

    /// Error during rendering (text, JSON).
    #[error("Rendering error: {0}")]
    Render(String),
}

impl Error {
    /// Wrap an I/O failure with the name of the source being read.
    pub fn source_unavailable(source_name: impl Into<String>, source: io::Error) -> Self {
        Error::SourceUnavailable {
            source_name: source_name.into(),
            source,
        }
    }

    /// Root id the error refers to, if any.
    pub fn root_id(&self) -> Option<u64> {
        match self {
            Error::IncompleteRootBlock(id)
            | Error::MissingBaseField(id)
            | Error::MalformedBaseField(id)
            | Error::MissingValueField(id)
            | Error::MalformedValueField(id) => Some(*id),
            Error::InvalidBase { id, .. } | Error::UnexpectedLine { id, .. } => Some(*id),
            _ => None,
        }
    }
}
