//! Parsing options and configuration.

/// Default section marker that anchors the scan.
pub const DEFAULT_MARKER: &str = "keys";

/// Options for scanning a root document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Name of the section marker, matched as a quoted, case-sensitive token
    pub marker: String,
}

impl ParseOptions {
    /// Create new parse options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the section marker name (without quotes).
    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = marker.into();
        self
    }

    /// The marker as it appears in the input, quotes included.
    pub fn quoted_marker(&self) -> String {
        format!("\"{}\"", self.marker)
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            marker: DEFAULT_MARKER.to_string(),
        }
    }
}
