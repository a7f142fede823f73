//! Tab expansion and character-level search over source lines.
//!
//! Delimiter offsets are found as raw character indices into a line. Editors
//! display a tab as several columns, so every reported column is corrected
//! by `(tab_width - 1)` for each tab preceding it.

use crate::error::ConfigError;
use std::fmt;

/// The number of display columns a tab occupies. Always at least 1.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct TabWidth(usize);

impl TabWidth {
    /// The width used when nothing else is configured.
    pub const DEFAULT: TabWidth = TabWidth(4);

    /// Create a tab width, rejecting zero.
    pub fn new(width: usize) -> Result<Self, ConfigError> {
        if width == 0 {
            return Err(ConfigError::InvalidTabWidth(width));
        }
        Ok(Self(width))
    }

    /// The configured width.
    #[inline]
    pub fn get(self) -> usize {
        self.0
    }

    /// Map a raw character index within `line` to its tab-expanded column.
    #[inline]
    pub fn expand(self, line: &[char], raw_index: usize) -> usize {
        self.widen(line, raw_index, raw_index)
    }

    /// Like [`TabWidth::expand`], but counts tabs over `line[0..window_end]`
    /// instead of `line[0..raw_index]`. The window is clamped to the line.
    #[inline]
    pub fn widen(self, line: &[char], raw_index: usize, window_end: usize) -> usize {
        raw_index + count_tabs(line, window_end) * (self.0 - 1)
    }
}

impl Default for TabWidth {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Debug for TabWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TabWidth({})", self.0)
    }
}

impl fmt::Display for TabWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Expand `raw_index` (in characters) of a string line under `tab_width`.
///
/// Returns `raw_index + tabs * (tab_width - 1)` where `tabs` is the number of
/// tab characters among the first `raw_index` characters of `line`.
pub fn expand(line: &str, raw_index: usize, tab_width: TabWidth) -> usize {
    let tabs = line.chars().take(raw_index).filter(|&c| c == '\t').count();
    raw_index + tabs * (tab_width.get() - 1)
}

/// Count tab characters in `line[0..end]`, clamping `end` to the line length.
#[inline]
pub fn count_tabs(line: &[char], end: usize) -> usize {
    line[..end.min(line.len())]
        .iter()
        .filter(|&&c| c == '\t')
        .count()
}

/// Find the first occurrence of `needle` in `line` at or after `from`.
///
/// A `from` beyond the end of the line finds nothing.
pub fn find(line: &[char], needle: &str, from: usize) -> Option<usize> {
    let needle: Vec<char> = needle.chars().collect();
    if needle.is_empty() || from >= line.len() {
        return None;
    }
    line[from..]
        .windows(needle.len())
        .position(|w| w == needle.as_slice())
        .map(|offset| from + offset)
}

/// Whether `line[index..]` begins with `prefix`.
#[inline]
pub fn starts_with_at(line: &[char], index: usize, prefix: &str) -> bool {
    let mut chars = line.get(index..).unwrap_or(&[]).iter();
    prefix.chars().all(|p| chars.next() == Some(&p))
}

/// Whether any of `markers` occurs in `line`.
///
/// Operates on bytes, so it is cheap enough to run on every line before the
/// line is decoded into characters.
#[inline]
pub fn contains_any(line: &str, markers: &[&str]) -> bool {
    markers
        .iter()
        .any(|m| memchr::memmem::find(line.as_bytes(), m.as_bytes()).is_some())
}
