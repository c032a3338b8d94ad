//! JSON rendering for decoded reports.
//!
//! Keys become an object with `n` and `k`; roots become an array in ascending
//! id order, each with its raw digits and decimal value.

use crate::error::{Error, Result};
use crate::model::Report;

/// Layout of the emitted JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// One field per line, two-space indent
    #[default]
    Pretty,
    /// The whole report on a single line
    Compact,
}

/// Serialize a decoded report.
///
/// Serialization failures surface as `Error::Render`.
pub fn to_json(report: &Report, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(report),
        JsonFormat::Compact => serde_json::to_string(report),
    };

    result.map_err(|e| Error::Render(format!("report to JSON: {}", e)))
}
