//! Configuration for HTML rendering

/// Configuration options for HTML output
#[derive(Debug, Clone)]
pub struct HtmlConfig {
    /// Prefix for CSS class names (e.g., "cb-" for "cb-title")
    pub class_prefix: Option<String>,

    /// Whether to put each element on its own indented line
    pub pretty_print: bool,

    /// Message shown when the document has no blocks; None renders nothing
    pub empty_message: Option<String>,
}

impl Default for HtmlConfig {
    fn default() -> Self {
        Self {
            class_prefix: Some("cb-".to_string()),
            pretty_print: true,
            empty_message: Some("Your description preview will appear here".to_string()),
        }
    }
}

impl HtmlConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the CSS class prefix
    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = Some(prefix.into());
        self
    }

    /// Remove the CSS class prefix
    pub fn without_class_prefix(mut self) -> Self {
        self.class_prefix = None;
        self
    }

    /// Set whether to pretty-print output
    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }

    /// Set the empty-state message
    pub fn with_empty_message(mut self, message: impl Into<String>) -> Self {
        self.empty_message = Some(message.into());
        self
    }

    /// Render nothing for an empty document
    pub fn without_empty_message(mut self) -> Self {
        self.empty_message = None;
        self
    }
}
