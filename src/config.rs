//! Report configuration
//!
//! Defaults can be set in a TOML file passed with `--config`:
//!
//! ```toml
//! input = "logs/profile.log"
//! format = "csv"
//! ```
//!
//! Values given on the command line win over the file.

use crate::cli::{Cli, OutputFormat};
use crate::error::{ProfileLogError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Log read when nothing else is configured
pub const DEFAULT_LOG_FILE: &str = "profile.log";

/// Settings for one report run
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ReportConfig {
    /// Profile log to read
    pub input: PathBuf,
    /// Output format
    pub format: OutputFormat,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_LOG_FILE),
            format: OutputFormat::default(),
        }
    }
}

impl ReportConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| ProfileLogError::io(path, e))?;

        Self::from_toml_str(&content).map_err(|e| ProfileLogError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Load configuration from a TOML string
    pub fn from_toml_str(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Resolve settings from the command line, reading `--config` if given
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let base = match &cli.config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        Ok(base.with_overrides(cli))
    }

    fn with_overrides(mut self, cli: &Cli) -> Self {
        if let Some(log) = &cli.log {
            self.input = log.clone();
        }
        if let Some(format) = cli.format {
            self.format = format;
        }
        self
    }
}
