//! Document model types for root extraction.
//!
//! The loader turns raw text into a [`Document`] of trimmed lines; the
//! parser turns that into [`Keys`] and a [`RootSet`]; decoding produces a
//! [`Report`] that renderers consume.

mod document;
mod report;
mod root;

pub use document::Document;
pub use report::{DecodedRoot, Report};
pub use root::{Extraction, Keys, RootEntry, RootSet};
