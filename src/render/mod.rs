//! Rendering module for converting documents to output formats.

mod html;
mod json;
mod options;

pub use html::{escape, render_parts, to_html, HtmlRenderer, RenderedPart};
pub use json::{from_json, to_json, JsonFormat};
pub use options::{RenderOptions, DEFAULT_INDEX_PLACEHOLDER};
