//! Plain text rendering for decoded reports.

use crate::model::{DecodedRoot, Report};

/// Render a report as the keys line, a header, and one line per root.
///
/// The result ends with a newline.
pub fn to_text(report: &Report) -> String {
    let mut output = format!(
        "Parsed n = {}, k = {}\nParsed Roots:\n",
        report.keys.n, report.keys.k
    );
    for root in &report.roots {
        output.push_str(&root_line(root));
        output.push('\n');
    }
    output
}

/// Render a single decoded root.
pub fn root_line(root: &DecodedRoot) -> String {
    format!(
        "Root ID {}: base = {}, value = {}, decimal = {}",
        root.id, root.base, root.value, root.decimal
    )
}
