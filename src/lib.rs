//! # armydoc
//!
//! Parser for plain-text formal military documents.
//!
//! A source file starts with `KEY = VALUE` header properties, followed by
//! parts opened by `#` lines: the body, appendices (`Α`), addenda (`Α-1`) and
//! attachments (`Α-1-1`). Parts hold numbered lines, tables, images and
//! layout markers. Parsing stops at the end marker `ΤΕΛΟΣ`.
//!
//! ## Quick Start
//!
//! ```no_run
//! use armydoc::{parse_file, render};
//!
//! fn main() -> armydoc::Result<()> {
//!     let doc = parse_file("order.txt")?;
//!
//!     let options = render::RenderOptions::default();
//!     let html = render::to_html(&doc, &options)?;
//!     println!("{}", html);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Greek numbering**: `α.`, `(β)`, `1/` and similar list indexes
//! - **Tables**: alignment, line breaks and merged cells
//! - **Typed header**: references, recipients, classification
//! - **Part hierarchy**: addenda and attachments nested under their parents
//! - **Parallel rendering**: Uses Rayon to render parts to HTML

pub mod error;
pub mod model;
pub mod parser;
pub mod process;
pub mod render;

// Re-export commonly used types
pub use error::{Error, Result};
pub use model::{
    Alignment, Block, Document, Header, Line, LineKind, Orientation, Part, PartChild, PartKind,
    PropertyMap, PropertyValue, Table, TableCell,
};
pub use parser::{ParseOptions, TextParser};
pub use render::{JsonFormat, RenderOptions, RenderedPart};

use std::io::Read;
use std::path::Path;

/// Parse a document from source text.
///
/// # Example
///
/// ```
/// use armydoc::parse_str;
///
/// let source = "\
/// ΣΧΕΤ = Φ.1 | Φ.2
/// ΠΡΟΣ = ΓΕΣ
/// ΚΟΙΝ = 1η ΜΠ
/// ΒΑΘΜΟΣ = ΑΔΙΑΒΑΘΜΗΤΟ
/// ΣΧΕΔΙΟ = Σ.
/// ## ΚΟΡΜΟΣ
/// 1. Κείμενο
/// ΤΕΛΟΣ
/// ";
/// let doc = parse_str(source).unwrap();
/// assert_eq!(doc.part_count(), 1);
/// ```
///
/// Header post-processing needs the required properties; use
/// [`parse_str_with_options`] with [`ParseOptions::raw`] for documents
/// without them.
pub fn parse_str(source: &str) -> Result<Document> {
    TextParser::new(source).parse()
}

/// Parse a document from source text with custom options.
pub fn parse_str_with_options(source: &str, options: ParseOptions) -> Result<Document> {
    TextParser::with_options(source, options).parse()
}

/// Parse a document file.
///
/// # Arguments
///
/// * `path` - Path to the source file (UTF-8)
///
/// # Example
///
/// ```no_run
/// use armydoc::parse_file;
///
/// let doc = parse_file("order.txt").unwrap();
/// println!("Parts: {}", doc.part_count());
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Document> {
    let parser = TextParser::open(path)?;
    parser.parse()
}

/// Parse a document file with custom options.
///
/// # Example
///
/// ```no_run
/// use armydoc::{parse_file_with_options, ParseOptions};
///
/// let options = ParseOptions::new().with_end_marker("END");
/// let doc = parse_file_with_options("order.txt", options).unwrap();
/// ```
pub fn parse_file_with_options<P: AsRef<Path>>(path: P, options: ParseOptions) -> Result<Document> {
    let parser = TextParser::open_with_options(path, options)?;
    parser.parse()
}

/// Parse a document from a reader.
pub fn parse_reader<R: Read>(reader: R) -> Result<Document> {
    let parser = TextParser::from_reader(reader)?;
    parser.parse()
}

/// Parse a document from a reader with custom options.
pub fn parse_reader_with_options<R: Read>(reader: R, options: ParseOptions) -> Result<Document> {
    let parser = TextParser::from_reader_with_options(reader, options)?;
    parser.parse()
}

/// Convert a document file to JSON.
///
/// # Example
///
/// ```no_run
/// use armydoc::{to_json, JsonFormat};
///
/// let json = to_json("order.txt", JsonFormat::Pretty).unwrap();
/// std::fs::write("order.json", json).unwrap();
/// ```
pub fn to_json<P: AsRef<Path>>(path: P, format: JsonFormat) -> Result<String> {
    let doc = parse_file(path)?;
    render::to_json(&doc, format)
}

/// Convert a document file to an HTML page.
pub fn to_html<P: AsRef<Path>>(path: P) -> Result<String> {
    let doc = parse_file(path)?;
    render::to_html(&doc, &RenderOptions::default())
}

/// Builder for parsing and converting documents.
///
/// # Example
///
/// ```no_run
/// use armydoc::Armydoc;
///
/// let html = Armydoc::new()
///     .sequential()
///     .parse("order.txt")?
///     .to_html()?;
/// # Ok::<(), armydoc::Error>(())
/// ```
pub struct Armydoc {
    parse_options: ParseOptions,
    render_options: RenderOptions,
}

impl Armydoc {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            parse_options: ParseOptions::default(),
            render_options: RenderOptions::default(),
        }
    }

    /// Skip post-processing and restructuring.
    pub fn raw(mut self) -> Self {
        self.parse_options = self.parse_options.raw();
        self
    }

    /// Keep the flat part list but still derive the header.
    pub fn without_restructure(mut self) -> Self {
        self.parse_options = self.parse_options.with_restructure(false);
        self
    }

    /// Set the end-of-document marker.
    pub fn with_end_marker(mut self, marker: impl Into<String>) -> Self {
        self.parse_options = self.parse_options.with_end_marker(marker);
        self
    }

    /// Set the body part name.
    pub fn with_body_name(mut self, name: impl Into<String>) -> Self {
        self.parse_options = self.parse_options.with_body_name(name);
        self
    }

    /// Render parts on the calling thread.
    pub fn sequential(mut self) -> Self {
        self.render_options = self.render_options.sequential();
        self
    }

    /// Enable or disable the children listing in HTML output.
    pub fn with_children(mut self, include: bool) -> Self {
        self.render_options = self.render_options.with_children(include);
        self
    }

    /// Parse a document file and return a result wrapper.
    pub fn parse<P: AsRef<Path>>(self, path: P) -> Result<ArmydocResult> {
        let parser = TextParser::open_with_options(path, self.parse_options)?;
        let document = parser.parse()?;
        Ok(ArmydocResult {
            document,
            render_options: self.render_options,
        })
    }

    /// Parse source text.
    pub fn parse_str(self, source: &str) -> Result<ArmydocResult> {
        let document = TextParser::with_options(source, self.parse_options).parse()?;
        Ok(ArmydocResult {
            document,
            render_options: self.render_options,
        })
    }
}

impl Default for Armydoc {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of parsing a document.
pub struct ArmydocResult {
    /// The parsed document
    pub document: Document,
    /// Render options to use
    render_options: RenderOptions,
}

impl ArmydocResult {
    /// Convert to an HTML page.
    pub fn to_html(&self) -> Result<String> {
        render::to_html(&self.document, &self.render_options)
    }

    /// Render each top-level part separately.
    pub fn render_parts(&self) -> Result<Vec<RenderedPart>> {
        render::render_parts(&self.document, &self.render_options)
    }

    /// Convert to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.document, format)
    }

    /// Get the document.
    pub fn document(&self) -> &Document {
        &self.document
    }
}
