//! `#` comments and triple-quoted blocks.
//!
//! Triple-quoted strings are reported as comments wherever they appear.
//! Ordinary string literals are not tracked, so a `#` inside `'...'` or
//! `"..."` is taken as the start of a comment.

use crate::delimiters::*;
use crate::dialect::Dialect;
use crate::scanner::{CommentSyntax, LineStep};
use excom_core::text::{find, starts_with_at};
use excom_core::TabWidth;

/// The delimiter that opened a triple-quoted block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TripleQuote {
    /// `'''`
    Single,
    /// `"""`
    Double,
}

impl TripleQuote {
    pub fn as_str(self) -> &'static str {
        match self {
            TripleQuote::Single => TRIPLE_SINGLE,
            TripleQuote::Double => TRIPLE_DOUBLE,
        }
    }

    /// The triple quote starting at `line[index]`, if any.
    fn at(line: &[char], index: usize) -> Option<TripleQuote> {
        if starts_with_at(line, index, TRIPLE_SINGLE) {
            Some(TripleQuote::Single)
        } else if starts_with_at(line, index, TRIPLE_DOUBLE) {
            Some(TripleQuote::Double)
        } else {
            None
        }
    }
}

/// Scan mode of the Python-style machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PyMode {
    #[default]
    Normal,
    InTripleBlock(TripleQuote),
}

/// State machine for Python-style comments.
#[derive(Debug, Clone, Default)]
pub struct PyStyle {
    mode: PyMode,
}

impl PyStyle {
    pub fn mode(&self) -> PyMode {
        self.mode
    }
}

impl CommentSyntax for PyStyle {
    const DIALECT: Dialect = Dialect::PyStyle;
    const MARKERS: &'static [&'static str] = &["#", TRIPLE_SINGLE, TRIPLE_DOUBLE];

    fn in_block(&self) -> bool {
        matches!(self.mode, PyMode::InTripleBlock(_))
    }

    fn scan_line(&mut self, line: &[char], from: usize, tabs: TabWidth) -> LineStep {
        let mut index = from;

        while index + 1 < line.len() {
            match self.mode {
                PyMode::Normal => {
                    // Tabs are counted over `line[..index + 2]` for both
                    // delimiter widths.
                    if line[index] == HASH {
                        let start = index + 1;
                        return LineStep::Emit {
                            text: start..line.len(),
                            column: tabs.widen(line, start, index + 2),
                            resume: None,
                        };
                    }
                    if let Some(quote) = TripleQuote::at(line, index) {
                        let start = index + 3;
                        let column = tabs.widen(line, start, index + 2);
                        return match find(line, quote.as_str(), start) {
                            None => {
                                self.mode = PyMode::InTripleBlock(quote);
                                LineStep::Emit {
                                    text: start..line.len(),
                                    column,
                                    resume: None,
                                }
                            }
                            Some(pos) => LineStep::Emit {
                                text: start..pos,
                                column,
                                resume: Some(pos + 3),
                            },
                        };
                    }
                }
                PyMode::InTripleBlock(quote) => {
                    let column = tabs.expand(line, index);
                    return match find(line, quote.as_str(), index) {
                        None => LineStep::Emit {
                            text: index..line.len(),
                            column,
                            resume: None,
                        },
                        Some(pos) => {
                            self.mode = PyMode::Normal;
                            LineStep::Emit {
                                text: index..pos,
                                column,
                                resume: Some(pos + 3),
                            }
                        }
                    };
                }
            }
            index += 1;
        }

        LineStep::Done
    }
}
