//! The record produced for each comment fragment.

use serde::Serialize;
use std::fmt;

/// A comment fragment found by a scanner.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct CommentRecord {
    /// The comment content exactly as it appears between its delimiters,
    /// including the line terminator when the comment runs to end of line.
    pub text: String,
    /// 1-based number of the physical line the fragment is on.
    pub line: usize,
    /// 0-based, tab-expanded column of the first character of `text`.
    pub column: usize,
}

impl CommentRecord {
    /// Create a new record.
    pub fn new(text: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            text: text.into(),
            line,
            column,
        }
    }

    /// The text with any trailing `\n` or `\r\n` removed.
    pub fn trimmed_text(&self) -> &str {
        self.text.trim_end_matches(['\r', '\n'])
    }
}

impl fmt::Display for CommentRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}: {}", self.line, self.column, self.trimmed_text())
    }
}
