//! Error types for armydoc library.

use std::fmt;
use std::io;
use thiserror::Error;

use crate::model::PartKind;

/// Result type alias for armydoc operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while parsing or processing a document.
///
/// Every variant is a hard stop: the parser never hands back a partially
/// built document. Line numbers are 1-based.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A header property line did not split into exactly one key and one value.
    #[error("Malformed property on line {line}: {text:?}")]
    MalformedProperty { line: usize, text: String },

    /// A part header line could not be turned into a part.
    #[error("Malformed part header on line {line} ({reason}): {text:?}")]
    MalformedHeader {
        line: usize,
        text: String,
        reason: String,
    },

    /// A table attribute was not a `key:value` pair.
    #[error("Malformed table attribute on line {line}: {attribute:?}")]
    MalformedTableAttribute { line: usize, attribute: String },

    /// A table token was seen in the wrong table state.
    #[error("Table error on line {line}: {kind}")]
    TableState { line: usize, kind: TableStateKind },

    /// A merge marker has no neighbour to merge into.
    #[error("Table {table}: merge marker at row {row}, column {column} has no target cell")]
    DanglingMerge {
        table: u32,
        row: usize,
        column: usize,
    },

    /// A block token appeared before the first part header.
    #[error("Line {line} needs an open part: {text:?}")]
    NoOpenPart { line: usize, text: String },

    /// A required header property is absent.
    #[error("Missing required property: {0}")]
    MissingProperty(String),

    /// A property that must hold a single value holds a list.
    #[error("Property {0} must have a single value")]
    UnexpectedList(String),

    /// A part appeared before the part it must be attached to.
    #[error("{kind} {part} appears before any part it can be attached to")]
    HierarchyOrder { part: String, kind: PartKind },

    /// The document has appendices but no body part.
    #[error("Document has no body part")]
    MissingBody,

    /// Error during rendering (HTML, JSON).
    #[error("Rendering error: {0}")]
    Render(String),
}

/// The specific table state violation behind [`Error::TableState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableStateKind {
    /// A row or close token with no table open.
    NotOpen,
    /// A table open or part header while a table is still open.
    AlreadyOpen,
    /// Input ended with a table still open.
    Unclosed,
}

impl fmt::Display for TableStateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            TableStateKind::NotOpen => "no table is open",
            TableStateKind::AlreadyOpen => "a table is already open",
            TableStateKind::Unclosed => "table was never closed",
        };
        f.write_str(msg)
    }
}
