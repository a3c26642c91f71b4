//! Markup renderer
//!
//! Parses a generated markup document back into display blocks and, for
//! display surfaces that want markup rather than data, renders those blocks
//! as HTML with appropriate CSS classes for styling.

pub mod blocks;
pub mod config;
pub mod html;
pub mod inline;

pub use blocks::{render_blocks, DisplayBlock};
pub use config::HtmlConfig;
pub use html::render_html;
pub use inline::{parse_inline, plain_text, InlineSpan};
