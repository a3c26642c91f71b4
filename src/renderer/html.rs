//! HTML generation from display blocks

use super::blocks::DisplayBlock;
use super::inline::InlineSpan;
use super::HtmlConfig;

/// Build HTML elements incrementally
struct HtmlBuilder<'a> {
    config: &'a HtmlConfig,
    lines: Vec<String>,
    indent: usize,
}

impl<'a> HtmlBuilder<'a> {
    fn new(config: &'a HtmlConfig) -> Self {
        Self {
            config,
            lines: vec![],
            indent: 0,
        }
    }

    fn class(&self, name: &str) -> String {
        let prefix = self.config.class_prefix.as_deref().unwrap_or_default();
        format!(r#" class="{}{}""#, prefix, name)
    }

    fn indent_str(&self) -> String {
        if self.config.pretty_print {
            "  ".repeat(self.indent)
        } else {
            String::new()
        }
    }

    fn push(&mut self, line: String) {
        let indented = format!("{}{}", self.indent_str(), line);
        self.lines.push(indented);
    }

    fn open(&mut self, tag: &str, class: &str) {
        let line = format!("<{}{}>", tag, self.class(class));
        self.push(line);
        self.indent += 1;
    }

    fn close(&mut self, tag: &str) {
        self.indent = self.indent.saturating_sub(1);
        self.push(format!("</{}>", tag));
    }

    fn element(&mut self, tag: &str, class: &str, inner: &str) {
        let line = format!("<{}{}>{}</{}>", tag, self.class(class), inner, tag);
        self.push(line);
    }

    fn spans(&self, spans: &[InlineSpan]) -> String {
        spans
            .iter()
            .map(|span| match span {
                InlineSpan::Plain(text) => escape(text),
                InlineSpan::Strong(text) => {
                    format!("<strong{}>{}</strong>", self.class("strong"), escape(text))
                }
            })
            .collect()
    }

    fn block(&mut self, block: &DisplayBlock) {
        match block {
            DisplayBlock::Heading1 { text } => self.element("h2", "title", &escape(text)),
            DisplayBlock::Heading2 { text } => self.element("h3", "heading", &escape(text)),
            DisplayBlock::Rule => {
                let line = format!("<hr{}/>", self.class("rule"));
                self.push(line);
            }
            DisplayBlock::Paragraph { spans } => {
                let inner = self.spans(spans);
                self.element("p", "text", &inner);
            }
            DisplayBlock::ItalicLine { text } => self.element("p", "audience", &escape(text)),
            DisplayBlock::BulletList { items } => {
                self.open("ul", "list");
                for item in items {
                    let inner = self.spans(item);
                    self.element("li", "item", &inner);
                }
                self.close("ul");
            }
        }
    }

    fn finish(self) -> String {
        let separator = if self.config.pretty_print { "\n" } else { "" };
        self.lines.join(separator)
    }
}

/// Render display blocks as an HTML fragment
///
/// Headings are demoted one level (`#` becomes `<h2>`) so the fragment can sit
/// under a page title.
pub fn render_html(blocks: &[DisplayBlock], config: &HtmlConfig) -> String {
    let mut builder = HtmlBuilder::new(config);

    builder.open("div", "preview");
    if blocks.is_empty() {
        if let Some(message) = &config.empty_message {
            builder.element("p", "empty", &escape(message));
        }
    }
    for block in blocks {
        builder.block(block);
    }
    builder.close("div");

    builder.finish()
}

/// Escape text for use in HTML content
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
