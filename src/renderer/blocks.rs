//! Line scanner turning a markup document into display blocks

use serde::Serialize;

use super::inline::{parse_inline, InlineSpan};

/// One visually distinct region of the rendered document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DisplayBlock {
    /// `# text`
    Heading1 { text: String },
    /// `## text`
    Heading2 { text: String },
    /// `---`
    Rule,
    /// Any other non-blank line
    Paragraph { spans: Vec<InlineSpan> },
    /// `*text*` on a line of its own
    ItalicLine { text: String },
    /// A run of consecutive `- text` lines
    BulletList { items: Vec<Vec<InlineSpan>> },
}

const HEADING1: &str = "# ";
const HEADING2: &str = "## ";
const BULLET: &str = "- ";
const RULE: &str = "---";

/// Classify every line of `document` into display blocks
///
/// Never fails: lines that match no known prefix become paragraphs, and
/// blank lines are dropped.
pub fn render_blocks(document: &str) -> Vec<DisplayBlock> {
    if document.is_empty() {
        return Vec::new();
    }

    let lines: Vec<&str> = document.split('\n').collect();
    let mut blocks = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        let line = lines[i];

        if let Some(text) = line.strip_prefix(HEADING1) {
            blocks.push(DisplayBlock::Heading1 {
                text: text.to_string(),
            });
            i += 1;
            continue;
        }

        if let Some(text) = line.strip_prefix(HEADING2) {
            blocks.push(DisplayBlock::Heading2 {
                text: text.to_string(),
            });
            i += 1;
            continue;
        }

        if line.trim() == RULE {
            blocks.push(DisplayBlock::Rule);
            i += 1;
            continue;
        }

        if line.starts_with(BULLET) {
            let mut items = Vec::new();
            while let Some(item) = lines.get(i).and_then(|l| l.strip_prefix(BULLET)) {
                items.push(parse_inline(item));
                i += 1;
            }
            blocks.push(DisplayBlock::BulletList { items });
            continue;
        }

        if is_italic_line(line) {
            blocks.push(DisplayBlock::ItalicLine {
                text: strip_italic(line).to_string(),
            });
            i += 1;
            continue;
        }

        if !line.trim().is_empty() {
            blocks.push(DisplayBlock::Paragraph {
                spans: parse_inline(line),
            });
        }
        i += 1;
    }

    blocks
}

fn is_italic_line(line: &str) -> bool {
    line.starts_with('*') && line.ends_with('*') && !line.starts_with("**")
}

/// Drop the surrounding asterisks; a lone `*` leaves nothing
fn strip_italic(line: &str) -> &str {
    if line.len() < 2 {
        ""
    } else {
        &line[1..line.len() - 1]
    }
}
