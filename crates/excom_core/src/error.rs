//! Error types shared by the scanners and the configuration layer.
//!
//! An unsupported file type is not an error anywhere in the workspace:
//! dispatch reports it as `None`. Unterminated strings or block comments are
//! not errors either; the scanner simply ends in a non-idle state.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure while acquiring or reading scanner input.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The source file could not be opened.
    #[error("cannot open '{}': {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading from an already opened source failed.
    #[error("read failed: {0}")]
    Read(#[from] io::Error),

    /// A line was not valid UTF-8. `line` is 1-based.
    #[error("line {line} is not valid UTF-8")]
    InvalidUtf8 { line: usize },
}

/// An invalid configuration value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("tab width must be at least 1, got {0}")]
    InvalidTabWidth(usize),
}
