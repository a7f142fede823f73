//! excom_options: excom.json parsing and scan options.
//!
//! A config file is a JSON object with camelCase keys, all optional:
//!
//! ```json
//! { "tabWidth": 8 }
//! ```

use excom_core::{ConfigError, TabWidth};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// The config file looked up in the working directory when none is given.
pub const CONFIG_FILE_NAME: &str = "excom.json";

/// Options controlling a scan, matching the excom.json schema.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ScanOptions {
    /// Display width of a tab character. Defaults to 4.
    pub tab_width: Option<usize>,
}

impl ScanOptions {
    /// The effective tab width.
    pub fn tab_width(&self) -> Result<TabWidth, ConfigError> {
        match self.tab_width {
            Some(width) => TabWidth::new(width),
            None => Ok(TabWidth::DEFAULT),
        }
    }

    /// Override the tab width, e.g. from a command-line flag.
    pub fn with_tab_width(mut self, width: Option<usize>) -> Self {
        if width.is_some() {
            self.tab_width = width;
        }
        self
    }
}

/// Failure to load scan options.
#[derive(Debug, Error)]
pub enum OptionsError {
    #[error("cannot read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Invalid(#[from] ConfigError),
}

/// Parse options from a JSON string. Invalid values are rejected here rather
/// than when a scan starts.
pub fn parse_options(content: &str) -> Result<ScanOptions, OptionsError> {
    let options: ScanOptions = serde_json::from_str(content)?;
    options.tab_width()?;
    Ok(options)
}

/// Parse options from a file path.
pub fn parse_options_file(path: &Path) -> Result<ScanOptions, OptionsError> {
    let content = std::fs::read_to_string(path).map_err(|source| OptionsError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let options = parse_options(&content)?;
    tracing::debug!("loaded options from {}: {:?}", path.display(), options);
    Ok(options)
}

/// Load options from `explicit` if given, otherwise from `excom.json` in
/// `dir` if it exists, otherwise the defaults.
pub fn load_options(explicit: Option<&Path>, dir: &Path) -> Result<ScanOptions, OptionsError> {
    if let Some(path) = explicit {
        return parse_options_file(path);
    }
    let candidate = dir.join(CONFIG_FILE_NAME);
    if candidate.is_file() {
        return parse_options_file(&candidate);
    }
    Ok(ScanOptions::default())
}
