//! Comment dialects and extension-based dispatch.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// One of the supported comment syntaxes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    /// `//` line comments and `/* */` blocks.
    CStyle,
    /// `#` line comments and `'''`/`"""` blocks.
    PyStyle,
    /// `<!-- -->` blocks.
    XmlStyle,
}

impl Dialect {
    pub const ALL: [Dialect; 3] = [Dialect::CStyle, Dialect::PyStyle, Dialect::XmlStyle];

    /// Select a dialect from a file name's extension, ignoring case.
    /// Returns `None` for unrecognized extensions.
    pub fn from_path(path: impl AsRef<Path>) -> Option<Dialect> {
        let lower = path.as_ref().to_string_lossy().to_lowercase();

        if lower.ends_with(".py") {
            Some(Dialect::PyStyle)
        } else if lower.ends_with(".c") || lower.ends_with(".cpp") || lower.ends_with(".h") {
            Some(Dialect::CStyle)
        } else if lower.ends_with(".xml") || lower.ends_with(".html") || lower.ends_with(".htm") {
            Some(Dialect::XmlStyle)
        } else {
            None
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Dialect::CStyle => "c",
            Dialect::PyStyle => "py",
            Dialect::XmlStyle => "xml",
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dialect {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "c" | "cpp" | "h" => Ok(Dialect::CStyle),
            "py" | "python" => Ok(Dialect::PyStyle),
            "xml" | "html" | "htm" => Ok(Dialect::XmlStyle),
            other => Err(format!("unknown dialect '{}'", other)),
        }
    }
}
