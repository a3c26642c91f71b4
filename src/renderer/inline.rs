//! Inline strong-emphasis resolution

use serde::Serialize;

/// Marker opening and closing a strong span
const STRONG: &str = "**";

/// A run of text inside a paragraph or list item
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum InlineSpan {
    Plain(String),
    Strong(String),
}

impl InlineSpan {
    pub fn text(&self) -> &str {
        match self {
            InlineSpan::Plain(s) | InlineSpan::Strong(s) => s,
        }
    }
}

/// Split `text` into plain and strong spans
///
/// Paired `**` markers are consumed. An opening marker without a partner is
/// kept verbatim, together with everything after it, as one plain span.
pub fn parse_inline(text: &str) -> Vec<InlineSpan> {
    let mut spans = Vec::new();
    let mut rest = text;

    while !rest.is_empty() {
        let Some(open) = rest.find(STRONG) else {
            spans.push(InlineSpan::Plain(rest.to_string()));
            break;
        };

        if open > 0 {
            spans.push(InlineSpan::Plain(rest[..open].to_string()));
        }

        let inner_start = open + STRONG.len();
        let Some(len) = rest[inner_start..].find(STRONG) else {
            spans.push(InlineSpan::Plain(rest[open..].to_string()));
            break;
        };

        let close = inner_start + len;
        spans.push(InlineSpan::Strong(rest[inner_start..close].to_string()));
        rest = &rest[close + STRONG.len()..];
    }

    spans
}

/// Concatenated span text with emphasis dropped
pub fn plain_text(spans: &[InlineSpan]) -> String {
    spans.iter().map(InlineSpan::text).collect()
}
