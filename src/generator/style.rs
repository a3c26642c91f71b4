//! Output styles for generated documents

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::ParseKindError;

/// Shape of the generated document, independent of the framework
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputStyle {
    /// Title, audience line, one headed section per field, divider before the CTA
    #[default]
    Structured,
    /// Bold product name and flowing paragraphs
    Paragraph,
    /// Title, audience line, a single bullet list, then the CTA
    #[serde(alias = "bullets")]
    Bullet,
}

impl OutputStyle {
    pub const ALL: [OutputStyle; 3] = [
        OutputStyle::Structured,
        OutputStyle::Paragraph,
        OutputStyle::Bullet,
    ];

    pub fn key(self) -> &'static str {
        match self {
            OutputStyle::Structured => "structured",
            OutputStyle::Paragraph => "paragraph",
            OutputStyle::Bullet => "bullet",
        }
    }

    /// Tab label shown above the preview
    pub fn label(self) -> &'static str {
        match self {
            OutputStyle::Structured => "Structured",
            OutputStyle::Paragraph => "Paragraph",
            OutputStyle::Bullet => "Bullet Points",
        }
    }
}

impl fmt::Display for OutputStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for OutputStyle {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "structured" => Ok(OutputStyle::Structured),
            "paragraph" => Ok(OutputStyle::Paragraph),
            "bullet" | "bullets" => Ok(OutputStyle::Bullet),
            _ => Err(ParseKindError::new(
                "style",
                s,
                &["structured", "paragraph", "bullet"],
            )),
        }
    }
}
