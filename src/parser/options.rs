//! Parsing options and configuration.

/// Default end-of-document marker.
pub const DEFAULT_END_MARKER: &str = "ΤΕΛΟΣ";

/// Default name of the body part.
pub const DEFAULT_BODY_NAME: &str = "ΚΟΡΜΟΣ";

/// Options for parsing documents.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Substring that ends the document; later lines are never read
    pub end_marker: String,

    /// Part name reserved for the body
    pub body_name: String,

    /// Derive the typed header after parsing
    pub post_process: bool,

    /// Nest appendices, addenda and attachments after parsing
    pub restructure: bool,
}

impl ParseOptions {
    /// Create new parse options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the end-of-document marker.
    pub fn with_end_marker(mut self, marker: impl Into<String>) -> Self {
        self.end_marker = marker.into();
        self
    }

    /// Set the body part name.
    pub fn with_body_name(mut self, name: impl Into<String>) -> Self {
        self.body_name = name.into();
        self
    }

    /// Enable or disable post-processing.
    pub fn with_post_processing(mut self, enabled: bool) -> Self {
        self.post_process = enabled;
        self
    }

    /// Enable or disable restructuring.
    pub fn with_restructure(mut self, enabled: bool) -> Self {
        self.restructure = enabled;
        self
    }

    /// Stop after the line pass: no header, flat part list.
    pub fn raw(self) -> Self {
        self.with_post_processing(false).with_restructure(false)
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            end_marker: DEFAULT_END_MARKER.to_string(),
            body_name: DEFAULT_BODY_NAME.to_string(),
            post_process: true,
            restructure: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = ParseOptions::default();
        assert_eq!(options.end_marker, "ΤΕΛΟΣ");
        assert_eq!(options.body_name, "ΚΟΡΜΟΣ");
        assert!(options.post_process);
        assert!(options.restructure);
    }

    #[test]
    fn test_builder() {
        let options = ParseOptions::new().with_end_marker("END").raw();
        assert_eq!(options.end_marker, "END");
        assert!(!options.post_process);
        assert!(!options.restructure);
    }
}
