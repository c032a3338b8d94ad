//! Rendering module for converting decoded reports to output formats.

mod json;
mod text;

pub use json::{to_json, JsonFormat};
pub use text::{root_line, to_text};
