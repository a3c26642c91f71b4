//! Word and character counts for a generated document

/// Size of a document as reported next to the copy button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DocumentStats {
    /// Whitespace-separated tokens, markup characters included
    pub words: usize,
    /// Unicode scalar values in the trimmed document
    pub characters: usize,
}

impl DocumentStats {
    pub fn of(document: &str) -> Self {
        let trimmed = document.trim();
        Self {
            words: trimmed.split_whitespace().count(),
            characters: trimmed.chars().count(),
        }
    }

    /// Whether there is anything worth previewing or copying
    pub fn has_content(&self) -> bool {
        self.characters > 0
    }
}
