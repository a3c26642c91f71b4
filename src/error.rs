//! Error types for brief loading and option parsing

use ariadne::{Color, Label, Report, ReportKind, Source};
use thiserror::Error;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

/// An unrecognized framework or style name
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown {what} '{value}' (expected one of: {expected})")]
pub struct ParseKindError {
    pub what: &'static str,
    pub value: String,
    pub expected: String,
}

impl ParseKindError {
    pub fn new(what: &'static str, value: &str, expected: &[&str]) -> Self {
        Self {
            what,
            value: value.to_string(),
            expected: expected.join(", "),
        }
    }
}

/// Errors that can occur when loading a brief
#[derive(Debug, Error)]
pub enum BriefError {
    #[error("failed to read brief: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid brief: {message}")]
    Syntax { message: String, span: Option<Span> },
}

impl From<toml::de::Error> for BriefError {
    fn from(err: toml::de::Error) -> Self {
        BriefError::Syntax {
            message: err.message().trim().to_string(),
            span: err.span(),
        }
    }
}

impl BriefError {
    /// Get the source span if available
    pub fn span(&self) -> Option<&Span> {
        match self {
            BriefError::Syntax { span, .. } => span.as_ref(),
            _ => None,
        }
    }

    /// Format the error with source context using ariadne
    ///
    /// Errors without a location fall back to their plain message.
    pub fn format(&self, source: &str, filename: &str) -> String {
        let (message, span) = match self {
            BriefError::Syntax {
                message,
                span: Some(span),
            } => (message, span.clone()),
            _ => return format!("Error: {}\n", self),
        };

        let mut buf = Vec::new();
        let written = Report::build(ReportKind::Error, filename, span.start)
            .with_message("invalid brief")
            .with_label(
                Label::new((filename, span))
                    .with_message(message)
                    .with_color(Color::Red),
            )
            .finish()
            .write((filename, Source::from(source)), &mut buf);

        match written {
            Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
            Err(_) => format!("Error: {}\n", self),
        }
    }
}
