//! excom_scanner: Comment extraction for C-style, Python-style and
//! markup-style source text.
//!
//! Each dialect is a small state machine driven one line at a time by the
//! resumable [`Comments`] iterator. Every comment fragment is reported as a
//! [`CommentRecord`] carrying its text, 1-based line and tab-expanded column.
//! Block comments spanning several lines yield one record per line.

mod c_style;
mod delimiters;
mod dialect;
mod py_style;
mod record;
mod scanner;
mod xml_style;

pub use c_style::{CMode, CStyle};
pub use dialect::Dialect;
pub use py_style::{PyMode, PyStyle, TripleQuote};
pub use record::CommentRecord;
pub use scanner::{
    scan_file, scan_str, AnyScanner, CStyleScanner, CommentSyntax, Comments, LineStep,
    PyStyleScanner, XmlStyleScanner,
};
pub use xml_style::{XmlMode, XmlStyle};

pub use excom_core::{ScanError, TabWidth};
