//! excom_core: Core utilities for the excom comment extractor.
//!
//! Provides tab-aware column arithmetic, the line source every scanner
//! reads from, and the error types shared across the workspace.

pub mod error;
pub mod lines;
pub mod text;

// Re-export commonly used types
pub use error::{ConfigError, ScanError};
pub use lines::SourceLines;
pub use text::TabWidth;
