//! Comment delimiters recognized by the scanners.

// C-style
pub const LINE_COMMENT: &str = "//";
pub const BLOCK_OPEN: &str = "/*";
pub const BLOCK_CLOSE: &str = "*/";
pub const DOUBLE_QUOTE: char = '"';
pub const SINGLE_QUOTE: char = '\'';
pub const BACKSLASH: char = '\\';

// Python-style
pub const HASH: char = '#';
pub const TRIPLE_SINGLE: &str = "'''";
pub const TRIPLE_DOUBLE: &str = "\"\"\"";

// Markup-style
pub const MARKUP_OPEN: &str = "<!--";
pub const MARKUP_CLOSE: &str = "-->";
