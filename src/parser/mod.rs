//! Document scanning module.

mod keys;
mod options;
mod root_parser;
mod roots;
mod tokenizer;

pub use keys::KeyExtractor;
pub use options::{ParseOptions, DEFAULT_MARKER};
pub use root_parser::RootParser;
pub use roots::RootExtractor;
pub use tokenizer::{classify, LineKind};
