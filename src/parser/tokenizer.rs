//! Line classification for the root scanner.

const BASE_MARKER: &str = "\"base\"";
const VALUE_MARKER: &str = "\"value\"";

/// What a single trimmed line looks like to the root scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// `"<digits>...` opening a root block; carries the digit run.
    LabelStart(&'a str),
    /// A line containing the `"base"` marker.
    BaseField,
    /// A line containing the `"value"` marker.
    ValueField,
    /// A line starting with `}`.
    BlockEnd,
    /// Anything else.
    Other,
}

/// Classify a trimmed line.
///
/// Label detection wins over field detection, so `"2": {"base": ...` is a
/// label line. A line naming both fields takes the kind of the earlier one.
pub fn classify(line: &str) -> LineKind<'_> {
    if let Some(label) = label_digits(line) {
        return LineKind::LabelStart(label);
    }
    if line.starts_with('}') {
        return LineKind::BlockEnd;
    }
    match (line.find(BASE_MARKER), line.find(VALUE_MARKER)) {
        (Some(b), Some(v)) if v < b => LineKind::ValueField,
        (Some(_), _) => LineKind::BaseField,
        (None, Some(_)) => LineKind::ValueField,
        (None, None) => LineKind::Other,
    }
}

/// Leading digit run of a label line, or `None` if the line is not a label.
fn label_digits(line: &str) -> Option<&str> {
    if line.len() <= 3 {
        return None;
    }
    let rest = line.strip_prefix('"')?;
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if end == 0 {
        return None;
    }
    Some(&rest[..end])
}

/// Quoted string following `marker` on `line`.
///
/// Returns `None` when the marker is absent, `Some(None)` when the marker is
/// present but no complete quoted string follows it.
pub fn quoted_after<'a>(line: &'a str, marker: &str) -> Option<Option<&'a str>> {
    let start = line.find(marker)? + marker.len();
    let rest = &line[start..];
    let quoted = rest.find('"').and_then(|open| {
        let body = &rest[open + 1..];
        body.find('"').map(|close| &body[..close])
    });
    Some(quoted)
}

/// Quoted string following the `"base"` marker.
pub fn base_field(line: &str) -> Option<Option<&str>> {
    quoted_after(line, BASE_MARKER)
}

/// Quoted string following the `"value"` marker.
pub fn value_field(line: &str) -> Option<Option<&str>> {
    quoted_after(line, VALUE_MARKER)
}
