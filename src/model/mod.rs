//! Document model types.
//!
//! The parser fills a [`Document`] in a single pass; post-processing adds a
//! typed [`Header`] and restructuring nests sub-parts. The finished value is
//! immutable and safe to share between render threads.

mod block;
mod document;
mod header;
mod part;
mod property;
mod table;

pub use block::{Block, IndexStyle, Line, LineKind, ListIndex, Numeral};
pub use document::Document;
pub use header::{
    keys, ClassificationCode, Header, LabeledReference, NumberedRecipient, RecipientList,
    References, ORIGINAL_DRAFT,
};
pub use part::{normalize_title, Orientation, Part, PartChild, PartKind, LEVEL_SEPARATOR};
pub use property::{PropertyMap, PropertyValue, MULTI_VALUE_SEPARATOR};
pub use table::{Alignment, Table, TableCell};
