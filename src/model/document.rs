//! Document-level types.

use super::{Header, Part, PartKind, PropertyMap};
use serde::{Deserialize, Serialize};

/// A parsed document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Header properties, as assigned
    pub properties: PropertyMap,

    /// Typed header, set by post-processing
    pub header: Option<Header>,

    /// Top-level parts, in document order
    pub parts: Vec<Part>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a part and return its index.
    pub fn add_part(&mut self, part: Part) -> usize {
        self.parts.push(part);
        self.parts.len() - 1
    }

    /// Get the number of top-level parts.
    pub fn part_count(&self) -> usize {
        self.parts.len()
    }

    /// Check if the document has any parts.
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Get the body part.
    pub fn body(&self) -> Option<&Part> {
        self.parts.iter().find(|p| p.kind == PartKind::Body)
    }

    /// Find a top-level part by name.
    pub fn find_part(&self, name: &str) -> Option<&Part> {
        self.parts.iter().find(|p| p.name == name)
    }

    /// Iterate over top-level parts of one kind.
    pub fn parts_of_kind(&self, kind: PartKind) -> impl Iterator<Item = &Part> {
        self.parts.iter().filter(move |p| p.kind == kind)
    }

    /// Total number of blocks, including nested attachments.
    pub fn block_count(&self) -> usize {
        fn count(part: &Part) -> usize {
            part.block_count() + part.nested_parts().map(count).sum::<usize>()
        }
        self.parts.iter().map(count).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Block, Orientation};

    #[test]
    fn test_document_new() {
        let doc = Document::new();
        assert!(doc.is_empty());
        assert!(doc.body().is_none());
        assert!(doc.header.is_none());
    }

    #[test]
    fn test_find_parts() {
        let mut doc = Document::new();
        doc.add_part(Part::body("ΚΟΡΜΟΣ", Orientation::Portrait));
        let idx = doc.add_part(Part::new(
            "Α",
            "Οργάνωση",
            PartKind::Appendix,
            Orientation::Portrait,
        ));
        doc.parts[idx].add_block(Block::PageBreak);

        assert_eq!(idx, 1);
        assert_eq!(doc.body().map(|p| p.name.as_str()), Some("ΚΟΡΜΟΣ"));
        assert!(doc.find_part("Α").is_some());
        assert_eq!(doc.parts_of_kind(PartKind::Appendix).count(), 1);
        assert_eq!(doc.block_count(), 1);
    }
}
