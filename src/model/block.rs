//! Block-level types.

use super::Table;
use serde::{Deserialize, Serialize};

/// A content block inside a part.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// A text line, numbered or not
    Line(Line),

    /// A line rendered centered on the page
    CenteredLine {
        /// Line content, with presentational markup applied
        content: String,
        /// Whether the trailing line break is suppressed
        no_line_break: bool,
    },

    /// A dotted decorative separator
    Separator,

    /// An image reference
    Image {
        /// Image path, as written in the source
        path: String,
    },

    /// A page break marker
    PageBreak,

    /// A table
    Table(Table),
}

impl Block {
    /// Check if this block is a text line.
    pub fn is_line(&self) -> bool {
        matches!(self, Block::Line(_))
    }

    /// Check if this block is a table.
    pub fn is_table(&self) -> bool {
        matches!(self, Block::Table(_))
    }

    /// Get the line, if this block is one.
    pub fn as_line(&self) -> Option<&Line> {
        match self {
            Block::Line(line) => Some(line),
            _ => None,
        }
    }

    /// Get the table, if this block is one.
    pub fn as_table(&self) -> Option<&Table> {
        match self {
            Block::Table(table) => Some(table),
            _ => None,
        }
    }
}

/// Classification of a text line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineKind {
    /// Starts with a valid numbering token
    Indexed,
    /// Unnumbered and indented; continues the enclosing item
    Continuation,
    /// Unnumbered and not indented
    Plain,
}

/// A text line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    /// Line classification
    pub kind: LineKind,

    /// Numbering token; `None` renders as the placeholder index
    pub index: Option<ListIndex>,

    /// Line content, with presentational markup applied
    pub content: String,

    /// Number of leading tabs
    pub indent: usize,

    /// Whether the trailing line break is suppressed
    pub no_line_break: bool,
}

impl Line {
    /// Get the numbering token text, if any.
    pub fn index_token(&self) -> Option<&str> {
        self.index.as_ref().map(|i| i.token.as_str())
    }
}

/// A recognised list numbering token such as `3.`, `(β)` or `ιγ/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListIndex {
    /// The token exactly as written
    pub token: String,

    /// The numeral it carries
    pub numeral: Numeral,

    /// How the numeral is decorated
    pub style: IndexStyle,
}

/// Numeral of a list index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "system", content = "value", rename_all = "snake_case")]
pub enum Numeral {
    /// Decimal number (1-49)
    Arabic(u8),
    /// Greek ordinal, by 1-based position (1-21)
    Greek(u8),
}

impl Numeral {
    /// Ordinal position of the numeral, starting at 1.
    pub fn ordinal(&self) -> u8 {
        match self {
            Numeral::Arabic(n) | Numeral::Greek(n) => *n,
        }
    }
}

/// Decoration around a list numeral.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndexStyle {
    /// `1.`
    Dot,
    /// `1/`
    Slash,
    /// `(1)`
    Paren,
}

impl IndexStyle {
    /// Decorate a numeral with this style.
    pub fn format(&self, numeral: &str) -> String {
        match self {
            IndexStyle::Dot => format!("{}.", numeral),
            IndexStyle::Slash => format!("{}/", numeral),
            IndexStyle::Paren => format!("({})", numeral),
        }
    }
}
