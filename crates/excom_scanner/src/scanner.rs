//! The resumable comment iterator shared by all dialects.
//!
//! [`Comments`] owns its line source and the dialect state machine. Each call
//! to `next` resumes exactly where the previous one stopped: mid-line if the
//! last record left more of the line to scan, otherwise at the next line.

use crate::c_style::CStyle;
use crate::dialect::Dialect;
use crate::py_style::PyStyle;
use crate::record::CommentRecord;
use crate::xml_style::XmlStyle;
use excom_core::text::contains_any;
use excom_core::{ScanError, SourceLines, TabWidth};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::ops::Range;
use std::path::Path;

/// The outcome of scanning part of a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineStep {
    /// A comment fragment `line[text]` starting at display column `column`.
    /// Scanning continues at character `resume`, or on the next line when
    /// `resume` is `None`.
    Emit {
        text: Range<usize>,
        column: usize,
        resume: Option<usize>,
    },
    /// Nothing further on this line.
    Done,
}

/// A per-dialect comment state machine.
pub trait CommentSyntax: Default {
    /// The dialect this machine implements.
    const DIALECT: Dialect;

    /// Delimiters whose absence lets the scanner skip a line outright when
    /// the machine is not inside a block comment.
    const MARKERS: &'static [&'static str];

    /// Whether the machine is inside a block comment carried over from a
    /// previous line.
    fn in_block(&self) -> bool;

    /// Scan `line` starting at character `from` until a fragment is found or
    /// the line is exhausted.
    fn scan_line(&mut self, line: &[char], from: usize, tabs: TabWidth) -> LineStep;
}

/// A lazy, forward-only sequence of comment records read from `R`.
///
/// After an input error is yielded the sequence ends.
pub struct Comments<S, R> {
    lines: SourceLines<R>,
    syntax: S,
    tabs: TabWidth,
    /// The line currently being scanned.
    line: Vec<char>,
    /// 1-based number of `line`.
    line_num: usize,
    /// Character index in `line` to resume from.
    index: usize,
    /// Whether `line` may still hold unscanned fragments.
    pending: bool,
}

/// Scanner for `//` and `/* */` comments.
pub type CStyleScanner<R> = Comments<CStyle, R>;
/// Scanner for `#` comments and triple-quoted blocks.
pub type PyStyleScanner<R> = Comments<PyStyle, R>;
/// Scanner for `<!-- -->` comments.
pub type XmlStyleScanner<R> = Comments<XmlStyle, R>;

impl<S: CommentSyntax, R: BufRead> Comments<S, R> {
    /// Scan lines from an existing line source.
    pub fn new(lines: SourceLines<R>, tabs: TabWidth) -> Self {
        Self {
            lines,
            syntax: S::default(),
            tabs,
            line: Vec::new(),
            line_num: 0,
            index: 0,
            pending: false,
        }
    }

    /// The dialect being scanned.
    pub fn dialect(&self) -> Dialect {
        S::DIALECT
    }

    /// The state machine, e.g. to inspect the mode left at end of input.
    pub fn syntax(&self) -> &S {
        &self.syntax
    }
}

impl<'a, S: CommentSyntax> Comments<S, &'a [u8]> {
    /// Scan in-memory text.
    pub fn from_text(text: &'a str, tabs: TabWidth) -> Self {
        Self::new(SourceLines::from_text(text), tabs)
    }
}

impl<S: CommentSyntax, R: BufRead> Iterator for Comments<S, R> {
    type Item = Result<CommentRecord, ScanError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.pending {
                match self.syntax.scan_line(&self.line, self.index, self.tabs) {
                    LineStep::Emit {
                        text,
                        column,
                        resume,
                    } => {
                        match resume {
                            Some(index) => self.index = index,
                            None => self.pending = false,
                        }
                        let text: String = self.line[text].iter().collect();
                        return Some(Ok(CommentRecord::new(text, self.line_num, column)));
                    }
                    LineStep::Done => self.pending = false,
                }
            }

            let raw = match self.lines.next()? {
                Ok(raw) => raw,
                Err(e) => return Some(Err(e)),
            };
            self.line_num += 1;

            if !self.syntax.in_block() && !contains_any(&raw, S::MARKERS) {
                continue;
            }
            self.line = raw.chars().collect();
            self.index = 0;
            self.pending = true;
        }
    }
}

/// A scanner for whichever dialect dispatch selected.
pub enum AnyScanner<R> {
    CStyle(CStyleScanner<R>),
    PyStyle(PyStyleScanner<R>),
    XmlStyle(XmlStyleScanner<R>),
}

impl<R: BufRead> AnyScanner<R> {
    /// Build the scanner for `dialect` over `lines`.
    pub fn new(dialect: Dialect, lines: SourceLines<R>, tabs: TabWidth) -> Self {
        match dialect {
            Dialect::CStyle => AnyScanner::CStyle(Comments::new(lines, tabs)),
            Dialect::PyStyle => AnyScanner::PyStyle(Comments::new(lines, tabs)),
            Dialect::XmlStyle => AnyScanner::XmlStyle(Comments::new(lines, tabs)),
        }
    }

    /// The dialect being scanned.
    pub fn dialect(&self) -> Dialect {
        match self {
            AnyScanner::CStyle(s) => s.dialect(),
            AnyScanner::PyStyle(s) => s.dialect(),
            AnyScanner::XmlStyle(s) => s.dialect(),
        }
    }
}

impl<R: BufRead> Iterator for AnyScanner<R> {
    type Item = Result<CommentRecord, ScanError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            AnyScanner::CStyle(s) => s.next(),
            AnyScanner::PyStyle(s) => s.next(),
            AnyScanner::XmlStyle(s) => s.next(),
        }
    }
}

/// Extract all comments from in-memory text.
///
/// Reading from a string cannot fail, so this returns the records directly.
pub fn scan_str(dialect: Dialect, text: &str, tabs: TabWidth) -> Vec<CommentRecord> {
    AnyScanner::new(dialect, SourceLines::from_text(text), tabs)
        .map_while(Result::ok)
        .collect()
}

/// Open `path` with the scanner its extension selects.
///
/// Returns `Ok(None)` when the extension is not recognized; the file is not
/// touched in that case.
pub fn scan_file(
    path: impl AsRef<Path>,
    tabs: TabWidth,
) -> Result<Option<AnyScanner<BufReader<File>>>, ScanError> {
    let path = path.as_ref();
    let Some(dialect) = Dialect::from_path(path) else {
        tracing::debug!("no scanner for {}", path.display());
        return Ok(None);
    };
    tracing::debug!("scanning {} as {}", path.display(), dialect);
    let lines = SourceLines::open(path)?;
    Ok(Some(AnyScanner::new(dialect, lines, tabs)))
}
