//! `//` and `/* */` comments, skipping delimiters inside string literals.

use crate::delimiters::*;
use crate::dialect::Dialect;
use crate::scanner::{CommentSyntax, LineStep};
use excom_core::text::{find, starts_with_at};
use excom_core::TabWidth;

/// Scan mode of the C-style machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CMode {
    #[default]
    Normal,
    /// Inside a string or character literal opened by the given quote.
    InString(char),
    InBlockComment,
}

/// State machine for C-style comments.
#[derive(Debug, Clone, Default)]
pub struct CStyle {
    mode: CMode,
}

impl CStyle {
    pub fn mode(&self) -> CMode {
        self.mode
    }
}

impl CommentSyntax for CStyle {
    const DIALECT: Dialect = Dialect::CStyle;
    const MARKERS: &'static [&'static str] = &[LINE_COMMENT, BLOCK_OPEN, BLOCK_CLOSE];

    fn in_block(&self) -> bool {
        self.mode == CMode::InBlockComment
    }

    fn scan_line(&mut self, line: &[char], from: usize, tabs: TabWidth) -> LineStep {
        let mut index = from;

        // The final character (normally the line terminator) is never examined.
        while index + 1 < line.len() {
            match self.mode {
                CMode::Normal => {
                    if starts_with_at(line, index, LINE_COMMENT) {
                        let start = index + 2;
                        return LineStep::Emit {
                            text: start..line.len(),
                            column: tabs.expand(line, start),
                            resume: None,
                        };
                    } else if starts_with_at(line, index, BLOCK_OPEN) {
                        let start = index + 2;
                        let column = tabs.expand(line, start);
                        return match find(line, BLOCK_CLOSE, start) {
                            None => {
                                self.mode = CMode::InBlockComment;
                                LineStep::Emit {
                                    text: start..line.len(),
                                    column,
                                    resume: None,
                                }
                            }
                            Some(pos) => LineStep::Emit {
                                text: start..pos,
                                column,
                                resume: Some(pos + 2),
                            },
                        };
                    } else if line[index] == DOUBLE_QUOTE || line[index] == SINGLE_QUOTE {
                        self.mode = CMode::InString(line[index]);
                    }
                }
                CMode::InString(quote) => {
                    // Single-character lookback: `\\"` is wrongly taken as an
                    // escaped quote.
                    let escaped = index > 0 && line[index - 1] == BACKSLASH;
                    if line[index] == quote && !escaped {
                        self.mode = CMode::Normal;
                    }
                }
                CMode::InBlockComment => {
                    let column = tabs.expand(line, index);
                    return match find(line, BLOCK_CLOSE, index) {
                        None => LineStep::Emit {
                            text: index..line.len(),
                            column,
                            resume: None,
                        },
                        Some(pos) => {
                            self.mode = CMode::Normal;
                            LineStep::Emit {
                                text: index..pos,
                                column,
                                resume: Some(pos + 2),
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

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_unterminated_block_enters_block_mode() {
        let mut machine = CStyle::default();
        let line = chars("int x; /* open\n");
        let step = machine.scan_line(&line, 0, TabWidth::DEFAULT);
        assert_eq!(
            step,
            LineStep::Emit {
                text: 9..15,
                column: 9,
                resume: None
            }
        );
        assert_eq!(machine.mode(), CMode::InBlockComment);
        assert!(machine.in_block());
    }

    #[test]
    fn test_string_mode_survives_line_end() {
        let mut machine = CStyle::default();
        let line = chars("s = \"unterminated\n");
        assert_eq!(machine.scan_line(&line, 0, TabWidth::DEFAULT), LineStep::Done);
        assert_eq!(machine.mode(), CMode::InString('"'));
        assert!(!machine.in_block());
    }

    #[test]
    fn test_escaped_quote_keeps_string_open() {
        let mut machine = CStyle::default();
        let line = chars(r#"x = "a \" // b"; // c"#);
        let step = machine.scan_line(&line, 0, TabWidth::DEFAULT);
        assert_eq!(
            step,
            LineStep::Emit {
                text: 19..21,
                column: 19,
                resume: None
            }
        );
    }

    #[test]
    fn test_inline_block_resumes_after_close() {
        let mut machine = CStyle::default();
        let line = chars("a /* b */ c // d\n");
        let step = machine.scan_line(&line, 0, TabWidth::DEFAULT);
        assert_eq!(
            step,
            LineStep::Emit {
                text: 4..7,
                column: 4,
                resume: Some(9)
            }
        );
        assert_eq!(machine.mode(), CMode::Normal);
    }
}
