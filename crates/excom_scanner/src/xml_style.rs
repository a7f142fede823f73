//! `<!-- -->` comments in XML and HTML.
//!
//! When a comment opens and closes on the same line, the emitted text runs
//! from after `<!--` to the end of the line rather than stopping at `-->`.
//! Scanning still resumes after the closing marker. The column of such a
//! comment is tab-expanded like every other column, not the raw offset
//! after `<!--`.

use crate::delimiters::*;
use crate::dialect::Dialect;
use crate::scanner::{CommentSyntax, LineStep};
use excom_core::text::{find, starts_with_at};
use excom_core::TabWidth;

/// Scan mode of the markup machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum XmlMode {
    #[default]
    Normal,
    InBlockComment,
}

/// State machine for markup comments.
#[derive(Debug, Clone, Default)]
pub struct XmlStyle {
    mode: XmlMode,
}

impl XmlStyle {
    pub fn mode(&self) -> XmlMode {
        self.mode
    }
}

impl CommentSyntax for XmlStyle {
    const DIALECT: Dialect = Dialect::XmlStyle;
    const MARKERS: &'static [&'static str] = &[MARKUP_OPEN, MARKUP_CLOSE];

    fn in_block(&self) -> bool {
        self.mode == XmlMode::InBlockComment
    }

    fn scan_line(&mut self, line: &[char], from: usize, tabs: TabWidth) -> LineStep {
        let mut index = from;

        while index + 1 < line.len() {
            match self.mode {
                XmlMode::Normal => {
                    if starts_with_at(line, index, MARKUP_OPEN) {
                        let start = index + 4;
                        let column = tabs.widen(line, start, index + 2);
                        // The search may overlap the opening marker's last dash.
                        let close = find(line, MARKUP_CLOSE, index + 3);
                        if close.is_none() {
                            self.mode = XmlMode::InBlockComment;
                        }
                        return LineStep::Emit {
                            text: start..line.len(),
                            column,
                            resume: close.map(|pos| pos + 3),
                        };
                    }
                }
                XmlMode::InBlockComment => {
                    let column = tabs.expand(line, index);
                    return match find(line, MARKUP_CLOSE, index) {
                        None => LineStep::Emit {
                            text: index..line.len(),
                            column,
                            resume: None,
                        },
                        Some(pos) => {
                            self.mode = XmlMode::Normal;
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
