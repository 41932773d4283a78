//! Processing applied to a fully parsed document.
//!
//! [`post_process`] derives the typed header from the properties and
//! [`restructure`] nests sub-parts under their parents. Both run after the
//! line pass, in that order.

mod header;
mod hierarchy;

pub use header::{post_process, HIGH_SENSITIVITY_MARKER, INLINE_RECIPIENT_LIMIT};
pub use hierarchy::restructure;
