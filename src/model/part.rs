//! Part-level types.

use super::Block;
use serde::{Deserialize, Serialize};
use std::fmt;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Separator whose count in a part name gives the nesting level.
pub const LEVEL_SEPARATOR: char = '-';

/// Kind of a document part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartKind {
    /// The main body
    Body,
    /// First-level sub-document (`Α`)
    Appendix,
    /// Second-level sub-document (`Α-1`)
    Addendum,
    /// Third-level sub-document (`Α-1-1`)
    Attachment,
}

impl PartKind {
    /// Derive the kind of a non-body part from its name.
    ///
    /// Returns `None` for names nested deeper than an attachment.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.matches(LEVEL_SEPARATOR).count() {
            0 => Some(PartKind::Appendix),
            1 => Some(PartKind::Addendum),
            2 => Some(PartKind::Attachment),
            _ => None,
        }
    }
}

impl fmt::Display for PartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PartKind::Body => "body",
            PartKind::Appendix => "appendix",
            PartKind::Addendum => "addendum",
            PartKind::Attachment => "attachment",
        };
        f.write_str(name)
    }
}

/// Page orientation of a part.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Portrait (default)
    #[default]
    Portrait,
    /// Landscape
    Landscape,
}

/// A major division of the document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Part {
    /// Part name (`ΚΟΡΜΟΣ`, `Α`, `Α-1`, ...)
    pub name: String,

    /// Part title
    pub description: String,

    /// Title without accents, uppercased
    pub description_normalized: String,

    /// Page orientation
    pub orientation: Orientation,

    /// Part kind
    pub kind: PartKind,

    /// Sub-parts attached by restructuring
    pub children: Vec<PartChild>,

    /// Content blocks
    pub blocks: Vec<Block>,
}

impl Part {
    /// Create a new empty part.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        kind: PartKind,
        orientation: Orientation,
    ) -> Self {
        let description = description.into();
        Self {
            name: name.into(),
            description_normalized: normalize_title(&description),
            description,
            orientation,
            kind,
            children: Vec::new(),
            blocks: Vec::new(),
        }
    }

    /// Create the body part.
    pub fn body(name: impl Into<String>, orientation: Orientation) -> Self {
        Self::new(name, String::new(), PartKind::Body, orientation)
    }

    /// Add a block to the part.
    pub fn add_block(&mut self, block: Block) {
        self.blocks.push(block);
    }

    /// Get the number of blocks.
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Check if the part is in landscape orientation.
    pub fn is_landscape(&self) -> bool {
        self.orientation == Orientation::Landscape
    }

    /// Summary of this part as seen from its parent.
    pub fn summary(&self) -> PartChild {
        PartChild::Summary {
            name: self.name.clone(),
            description: self.description.clone(),
        }
    }

    /// Iterate over fully nested child parts.
    pub fn nested_parts(&self) -> impl Iterator<Item = &Part> {
        self.children.iter().filter_map(|child| match child {
            PartChild::Part(part) => Some(part),
            PartChild::Summary { .. } => None,
        })
    }
}

/// A child entry of a part.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PartChild {
    /// Name and title of a sub-part that stays at the top level
    Summary { name: String, description: String },

    /// A sub-part moved under its parent
    Part(Part),
}

impl PartChild {
    /// Name of the child part.
    pub fn name(&self) -> &str {
        match self {
            PartChild::Summary { name, .. } => name,
            PartChild::Part(part) => &part.name,
        }
    }

    /// Title of the child part.
    pub fn description(&self) -> &str {
        match self {
            PartChild::Summary { description, .. } => description,
            PartChild::Part(part) => &part.description,
        }
    }
}

/// Strip accents and uppercase a title.
pub fn normalize_title(text: &str) -> String {
    text.nfkd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_uppercase()
}
