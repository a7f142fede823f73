//! Line-by-line access to scanner input.
//!
//! Lines are yielded with their terminator still attached, so comment text
//! that runs to the end of a line carries it. A `\r\n` terminator is
//! normalized to `\n`, making scan results independent of line-ending style.
//! The final line may have no terminator.

use crate::error::ScanError;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// An iterator of decoded source lines read from `R`.
///
/// The reader is owned for the lifetime of the iterator and released when the
/// iterator is dropped, whether or not it was exhausted. After the first
/// error the iterator yields nothing further.
pub struct SourceLines<R> {
    reader: R,
    buf: Vec<u8>,
    /// Number of lines read so far.
    line: usize,
    finished: bool,
}

impl<R: BufRead> SourceLines<R> {
    /// Read lines from any buffered reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
            line: 0,
            finished: false,
        }
    }
}

impl<'a> SourceLines<&'a [u8]> {
    /// Read lines from in-memory text.
    pub fn from_text(text: &'a str) -> Self {
        Self::new(text.as_bytes())
    }
}

impl SourceLines<BufReader<File>> {
    /// Open a file for line-by-line reading.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, ScanError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| ScanError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> Iterator for SourceLines<R> {
    type Item = Result<String, ScanError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        self.buf.clear();
        match self.reader.read_until(b'\n', &mut self.buf) {
            Ok(0) => {
                self.finished = true;
                None
            }
            Ok(_) => {
                self.line += 1;
                if self.buf.ends_with(b"\r\n") {
                    let len = self.buf.len();
                    self.buf.remove(len - 2);
                }
                match simdutf8::basic::from_utf8(&self.buf) {
                    Ok(text) => Some(Ok(text.to_owned())),
                    Err(_) => {
                        self.finished = true;
                        Some(Err(ScanError::InvalidUtf8 { line: self.line }))
                    }
                }
            }
            Err(e) => {
                self.finished = true;
                Some(Err(ScanError::Read(e)))
            }
        }
    }
}
