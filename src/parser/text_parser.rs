//! Line-oriented document parser.
//!
//! Each line is classified by the first matching rule below and fed into the
//! current part. Most tokens are detected by substring containment anywhere
//! in the line, so ordinary text containing `$` or `img:` is read as a page
//! break or an image.
//!
//! 1. end marker: stop reading
//! 2. `KEY = VALUE` before the first part: header property
//! 3. `#`: new part (`##` for landscape)
//! 4. `.//`: separator
//! 5. `img:`: image
//! 6. `$`: page break
//! 7. `/%`: close table
//! 8. any line while a table is open: table row
//! 9. `%`: open table
//! 10. other non-blank lines: text line

use std::io::Read;
use std::path::Path;

use crate::error::{Error, Result, TableStateKind};
use crate::model::{Block, Document, Line, LineKind, Orientation, Part, PartKind};
use crate::process::{post_process, restructure};

use super::index::match_index;
use super::inline::{apply_emphasis, split_no_break};
use super::options::ParseOptions;
use super::property::{parse_property, PROPERTY_SEPARATOR};
use super::table_builder::{TableBuilder, TABLE_CLOSE, TABLE_OPEN};

/// Marks a part header line.
pub const HEADER_MARKER: char = '#';
/// Decorative dotted separator.
pub const SEPARATOR_TOKEN: &str = ".//";
/// Image reference prefix.
pub const IMAGE_TOKEN: &str = "img:";
/// Page break.
pub const PAGE_BREAK_TOKEN: &str = "$";
/// Leading token of a centered line.
pub const CENTER_MARKER: &str = "><";

/// Parser for the plain-text document format.
pub struct TextParser {
    source: String,
    options: ParseOptions,
}

impl TextParser {
    /// Create a parser over source text.
    pub fn new(source: impl Into<String>) -> Self {
        Self::with_options(source, ParseOptions::default())
    }

    /// Create a parser over source text with custom options.
    pub fn with_options(source: impl Into<String>, options: ParseOptions) -> Self {
        Self {
            source: source.into(),
            options,
        }
    }

    /// Open a document file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with_options(path, ParseOptions::default())
    }

    /// Open a document file with custom options.
    pub fn open_with_options<P: AsRef<Path>>(path: P, options: ParseOptions) -> Result<Self> {
        let source = std::fs::read_to_string(path.as_ref())?;
        Ok(Self::with_options(source, options))
    }

    /// Read a document from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Self::from_reader_with_options(reader, ParseOptions::default())
    }

    /// Read a document from a reader with custom options.
    pub fn from_reader_with_options<R: Read>(mut reader: R, options: ParseOptions) -> Result<Self> {
        let mut source = String::new();
        reader.read_to_string(&mut source)?;
        Ok(Self::with_options(source, options))
    }

    /// Get the parse options.
    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Parse the document, then post-process and restructure it as configured.
    pub fn parse(&self) -> Result<Document> {
        let mut document = self.parse_lines()?;

        if self.options.post_process {
            document.header = Some(post_process(&document)?);
        }
        if self.options.restructure {
            restructure(&mut document)?;
        }

        Ok(document)
    }

    /// Run the line pass only, returning the flat document.
    pub fn parse_lines(&self) -> Result<Document> {
        let mut pass = LinePass::new(&self.options);
        for (i, line) in self.source.lines().enumerate() {
            if pass.feed(line, i + 1)? == Flow::Stop {
                return pass.finish(i + 1);
            }
        }

        log::warn!(
            "No end marker {:?} found, using the whole input",
            self.options.end_marker
        );
        let last_line = self.source.lines().count();
        pass.finish(last_line)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    NoPartYet,
    InPart,
    InTable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Stop,
}

/// Mutable state of one pass over the input.
struct LinePass<'a> {
    options: &'a ParseOptions,
    document: Document,
    state: State,
    current: Option<usize>,
    tables: TableBuilder,
}

impl<'a> LinePass<'a> {
    fn new(options: &'a ParseOptions) -> Self {
        Self {
            options,
            document: Document::new(),
            state: State::NoPartYet,
            current: None,
            tables: TableBuilder::new(),
        }
    }

    fn feed(&mut self, line: &str, line_no: usize) -> Result<Flow> {
        if line.contains(self.options.end_marker.as_str()) {
            return Ok(Flow::Stop);
        }

        // Properties are only read before the first part; later
        // `KEY = VALUE` lines fall through to the other rules.
        if self.state == State::NoPartYet && line.contains(PROPERTY_SEPARATOR) {
            let (key, value) = parse_property(line, line_no)?;
            self.document.properties.assign(key, value);
            return Ok(Flow::Continue);
        }

        if line.contains(HEADER_MARKER) {
            self.open_part(line, line_no)?;
        } else if line.contains(SEPARATOR_TOKEN) {
            self.push_block(Block::Separator, line, line_no)?;
        } else if line.contains(IMAGE_TOKEN) {
            let path = line.trim().split(':').nth(1).unwrap_or_default().trim();
            let block = Block::Image {
                path: path.to_string(),
            };
            self.push_block(block, line, line_no)?;
        } else if line.contains(PAGE_BREAK_TOKEN) {
            self.push_block(Block::PageBreak, line, line_no)?;
        } else if line.contains(TABLE_CLOSE) {
            let table = self.tables.close(line_no)?;
            self.state = State::InPart;
            self.push_block(Block::Table(table), line, line_no)?;
        } else if self.state == State::InTable {
            self.tables.add_row(line, line_no)?;
        } else if line.contains(TABLE_OPEN) {
            self.require_part(line, line_no)?;
            self.tables.open(line, line_no)?;
            self.state = State::InTable;
        } else if !line.trim().is_empty() {
            match self.current {
                Some(idx) => self.document.parts[idx].add_block(classify_line(line)),
                None => log::debug!("Skipping line {} before the first part", line_no),
            }
        }

        Ok(Flow::Continue)
    }

    fn open_part(&mut self, line: &str, line_no: usize) -> Result<()> {
        if self.tables.is_open() {
            return Err(Error::TableState {
                line: line_no,
                kind: TableStateKind::AlreadyOpen,
            });
        }

        let malformed = |reason: &str| Error::MalformedHeader {
            line: line_no,
            text: line.trim().to_string(),
            reason: reason.to_string(),
        };

        let orientation = if line.matches(HEADER_MARKER).count() == 2 {
            Orientation::Landscape
        } else {
            Orientation::Portrait
        };
        let cleaned = line.replace(HEADER_MARKER, "");
        let mut tokens = cleaned.split_whitespace();
        let name = tokens.next().ok_or_else(|| malformed("missing part name"))?;

        let part = if name == self.options.body_name {
            if self.document.body().is_some() {
                return Err(malformed("duplicate body part"));
            }
            Part::body(name, orientation)
        } else {
            let kind = PartKind::from_name(name)
                .ok_or_else(|| malformed("nested deeper than an attachment"))?;
            let description = tokens.collect::<Vec<_>>().join(" ");
            Part::new(name, description, kind, orientation)
        };

        log::info!("Added new part {} {}", part.name, part.description);
        self.current = Some(self.document.add_part(part));
        self.state = State::InPart;
        Ok(())
    }

    fn require_part(&self, line: &str, line_no: usize) -> Result<usize> {
        self.current.ok_or_else(|| Error::NoOpenPart {
            line: line_no,
            text: line.trim().to_string(),
        })
    }

    fn push_block(&mut self, block: Block, line: &str, line_no: usize) -> Result<()> {
        let idx = self.require_part(line, line_no)?;
        self.document.parts[idx].add_block(block);
        Ok(())
    }

    fn finish(self, line_no: usize) -> Result<Document> {
        if self.tables.is_open() {
            return Err(Error::TableState {
                line: line_no,
                kind: TableStateKind::Unclosed,
            });
        }
        Ok(self.document)
    }
}

/// Classify a non-blank content line.
pub fn classify_line(line: &str) -> Block {
    let indent = line.chars().take_while(|c| *c == '\t').count();
    let words: Vec<&str> = line.split_whitespace().collect();
    let first = words.first().copied().unwrap_or_default();

    if first == CENTER_MARKER {
        let joined = words.join(" ").replace(CENTER_MARKER, "");
        let (content, no_line_break) = split_no_break(apply_emphasis(joined.trim()));
        return Block::CenteredLine {
            content,
            no_line_break,
        };
    }

    let (kind, index, text) = match match_index(first) {
        Some(index) => (LineKind::Indexed, Some(index), words[1..].join(" ")),
        None if indent == 0 => (LineKind::Plain, None, words.join(" ")),
        None => (LineKind::Continuation, None, words.join(" ")),
    };
    let (content, no_line_break) = split_no_break(apply_emphasis(&text));

    Block::Line(Line {
        kind,
        index,
        content,
        indent,
        no_line_break,
    })
}
