//! Rendering options and configuration.

/// Placeholder written where a line has no numbering token.
pub const DEFAULT_INDEX_PLACEHOLDER: &str = "&nbsp;";

/// Options for rendering document content.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Render top-level parts on the rayon thread pool
    pub parallel: bool,

    /// List each part's children after its blocks
    pub include_children: bool,

    /// Text written in the index column of unnumbered lines
    pub index_placeholder: String,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Render parts one after another on the calling thread.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    /// Enable or disable the children listing.
    pub fn with_children(mut self, include: bool) -> Self {
        self.include_children = include;
        self
    }

    /// Set the index placeholder.
    pub fn with_index_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.index_placeholder = placeholder.into();
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            parallel: true,
            include_children: true,
            index_placeholder: DEFAULT_INDEX_PLACEHOLDER.to_string(),
        }
    }
}
