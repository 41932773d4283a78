//! Plain-text document parsing module.

pub mod index;
pub mod inline;
mod options;
pub mod property;
mod table_builder;
mod text_parser;

pub use options::{ParseOptions, DEFAULT_BODY_NAME, DEFAULT_END_MARKER};
pub use table_builder::{merge_spans, parse_cell, TableBuilder};
pub use text_parser::{classify_line, TextParser};
