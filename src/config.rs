//! Declarative logger configuration.
//!
//! Embedding applications usually already have a TOML config file; this
//! module lets them describe the logger there instead of wiring sinks by hand:
//!
//! ```toml
//! level = "info"
//! timestamps = true
//! call_sites = false
//!
//! [[target]]
//! kind = "stderr"
//! colors = true
//!
//! [[target]]
//! kind = "file"
//! path = "app.log"
//! ```

use crate::error::Error;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Top-level configuration. Every field has a default so a partial (or empty)
/// config is valid.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Minimum log level.
    pub level: String,
    /// Prefix each line with an `HH:MM:SS` timestamp.
    pub timestamps: bool,
    /// Include the call-site tag in each line.
    pub call_sites: bool,
    /// Output targets, in fan-out order. Empty means the default stdout sink.
    #[serde(rename = "target")]
    pub targets: Vec<TargetConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            level: "debug".to_string(),
            timestamps: true,
            call_sites: true,
            targets: Vec::new(),
        }
    }
}

/// One output target.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TargetConfig {
    /// Which stream to write to.
    pub kind: TargetKind,
    /// Request colored output. Downgraded automatically for non-terminal streams.
    pub colors: bool,
    /// Log file path, required for (and only meaningful to) `kind = "file"`.
    pub path: Option<String>,
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            kind: TargetKind::Stdout,
            colors: true,
            path: None,
        }
    }
}

/// The built-in stream kinds a config file can name. Anything more exotic goes
/// through [`Settings`](crate::Settings) with a caller-opened handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetKind {
    #[default]
    Stdout,
    Stderr,
    File,
}

impl Config {
    /// Parses a config from TOML text.
    ///
    /// # Errors
    /// Returns [`Error::ConfigParse`] on malformed TOML.
    pub fn from_toml(text: &str) -> Result<Self, Error> {
        Ok(toml::from_str(text)?)
    }

    /// Reads and parses a config file.
    ///
    /// # Errors
    /// Returns [`Error::Io`] if the file can't be read, [`Error::ConfigParse`]
    /// if it isn't valid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let text = fs::read_to_string(path)?;
        Self::from_toml(&text)
    }
}
