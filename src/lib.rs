//! Copy Builder - product descriptions from classic copywriting frameworks
//!
//! This library provides the generator, markup renderer, and brief loader
//! behind the `copy-builder` tool. A brief names a framework (AIDA, PAS or
//! FAB), an output style and the field values; the generator turns it into a
//! lightweight markup document, and the renderer turns that document into
//! display blocks or HTML.
//!
//! # Example
//!
//! ```rust
//! use copy_builder::render;
//!
//! let html = render(r#"
//!     [common]
//!     product_name = "Acme"
//!
//!     [aida]
//!     attention = "Hook"
//! "#).unwrap();
//! assert!(html.contains(r#"<h2 class="cb-title">Acme</h2>"#));
//! ```

pub mod brief;
pub mod error;
pub mod framework;
pub mod generator;
pub mod renderer;

pub use brief::Brief;
pub use error::{BriefError, ParseKindError};
pub use framework::{FrameworkFields, FrameworkKind};
pub use generator::{generate, DocumentStats, OutputStyle};
pub use renderer::{render_blocks, render_html, DisplayBlock, HtmlConfig, InlineSpan};

use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use tracing::debug;

/// Errors that can occur during the render pipeline
#[derive(Debug, Error)]
pub enum RenderError {
    /// Error loading the brief
    #[error(transparent)]
    Brief(#[from] BriefError),

    /// Error serializing display blocks
    #[error("failed to serialize blocks: {0}")]
    Json(#[from] serde_json::Error),
}

/// What the pipeline emits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// The generated markup document, verbatim
    Markup,
    /// An HTML fragment of the rendered blocks
    #[default]
    Html,
    /// The rendered blocks as JSON
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OutputFormat::Markup => "markup",
            OutputFormat::Html => "html",
            OutputFormat::Json => "json",
        })
    }
}

impl FromStr for OutputFormat {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "markup" | "text" => Ok(OutputFormat::Markup),
            "html" => Ok(OutputFormat::Html),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ParseKindError::new("format", s, &["markup", "html", "json"])),
        }
    }
}

/// Configuration for the complete render pipeline
#[derive(Debug, Clone, Default)]
pub struct RenderConfig {
    /// Output format
    pub format: OutputFormat,
    /// HTML output configuration
    pub html: HtmlConfig,
    /// Framework to use instead of the brief's selection
    pub framework: Option<FrameworkKind>,
    /// Style to use instead of the brief's selection
    pub style: Option<OutputStyle>,
    /// Debug mode: log every rendered block
    pub debug: bool,
}

impl RenderConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the output format
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Set the HTML configuration
    pub fn with_html(mut self, config: HtmlConfig) -> Self {
        self.html = config;
        self
    }

    /// Override the brief's framework
    pub fn with_framework(mut self, framework: FrameworkKind) -> Self {
        self.framework = Some(framework);
        self
    }

    /// Override the brief's output style
    pub fn with_style(mut self, style: OutputStyle) -> Self {
        self.style = Some(style);
        self
    }

    /// Enable or disable debug mode
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}

/// Render a TOML brief to HTML with default configuration
pub fn render(source: &str) -> Result<String, RenderError> {
    render_with_config(source, RenderConfig::default())
}

/// Render a TOML brief with custom configuration
///
/// # Example
///
/// ```rust
/// use copy_builder::{render_with_config, OutputFormat, OutputStyle, RenderConfig};
///
/// let source = r#"
///     framework = "pas"
///
///     [pas]
///     problem = "P"
///     solution = "S"
/// "#;
/// let config = RenderConfig::new()
///     .with_format(OutputFormat::Markup)
///     .with_style(OutputStyle::Bullet);
///
/// let markup = render_with_config(source, config).unwrap();
/// assert_eq!(markup, "- Problem: P\n- Solution: S");
/// ```
pub fn render_with_config(source: &str, config: RenderConfig) -> Result<String, RenderError> {
    let brief: Brief = source.parse()?;
    render_brief(&brief, &config)
}

/// Render an already loaded brief
pub fn render_brief(brief: &Brief, config: &RenderConfig) -> Result<String, RenderError> {
    let fields = brief.fields_for(config.framework.unwrap_or(brief.framework));
    let style = config.style.unwrap_or(brief.style);

    let markup = generate(fields, &brief.common, style);
    let stats = DocumentStats::of(&markup);
    debug!(
        framework = %fields.kind(),
        %style,
        words = stats.words,
        characters = stats.characters,
        "generated document"
    );

    match config.format {
        OutputFormat::Markup => Ok(markup),
        OutputFormat::Html => {
            let blocks = display_blocks(&markup, config);
            Ok(render_html(&blocks, &config.html))
        }
        OutputFormat::Json => {
            let blocks = display_blocks(&markup, config);
            Ok(serde_json::to_string_pretty(&blocks)?)
        }
    }
}

/// Render markup to blocks, logging each one in debug mode
fn display_blocks(markup: &str, config: &RenderConfig) -> Vec<DisplayBlock> {
    let blocks = render_blocks(markup);
    debug!(blocks = blocks.len(), "rendered markup");
    if config.debug {
        for (index, block) in blocks.iter().enumerate() {
            debug!("[{}] {:?}", index, block);
        }
    }
    blocks
}

/// Display blocks for a brief's current selection
pub fn preview(brief: &Brief) -> Vec<DisplayBlock> {
    render_blocks(&brief.generate())
}
