//! Configuration data model and validation

use crate::error::{AppError, Result};
use crate::logging::{LogFormat, LogLevel};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable selecting colored output (`true`/`false`)
pub const ENV_COLOR: &str = "PERFDIFF_COLOR";
/// Environment variable selecting the minimum log level
pub const ENV_LOG_LEVEL: &str = "PERFDIFF_LOG_LEVEL";
/// Environment variable selecting the log format
pub const ENV_LOG_FORMAT: &str = "PERFDIFF_LOG_FORMAT";
/// Conventional opt-out from colored output; any value disables color
pub const ENV_NO_COLOR: &str = "NO_COLOR";

/// Run configuration assembled once at startup and handed to the pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Input files, concatenated in order; empty means stdin
    #[serde(default)]
    pub inputs: Vec<PathBuf>,

    /// Print the baseline/subject difference
    #[serde(default)]
    pub diff: bool,

    /// Print every parsed document
    #[serde(default)]
    pub verbatim: bool,

    /// Enable colored terminal output
    #[serde(default = "default_enable_color")]
    pub enable_color: bool,

    /// Minimum level written to stderr
    #[serde(default = "default_log_level")]
    pub log_level: LogLevel,

    /// Log line format
    #[serde(default = "default_log_format")]
    pub log_format: LogFormat,

    /// Enable debug output
    #[serde(default)]
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            inputs: Vec::new(),
            diff: false,
            verbatim: false,
            enable_color: default_enable_color(),
            log_level: default_log_level(),
            log_format: default_log_format(),
            debug: false,
        }
    }
}

impl Config {
    /// Whether the run reads standard input instead of files
    pub fn reads_stdin(&self) -> bool {
        self.inputs.is_empty()
    }

    /// Whether any report was requested
    pub fn has_output(&self) -> bool {
        self.diff || self.verbatim
    }

    /// Validate the configuration and return any errors
    pub fn validate(&self) -> Result<()> {
        for path in &self.inputs {
            if path.as_os_str().is_empty() {
                return Err(AppError::config("Input file path cannot be empty"));
            }
        }

        Ok(())
    }

    /// Merge settings from an arbitrary variable source
    pub fn merge_from_lookup<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(enable_color) = lookup(ENV_COLOR) {
            self.enable_color = enable_color.trim().parse()
                .map_err(|e| AppError::config(format!("Invalid {} value '{}': {}", ENV_COLOR, enable_color, e)))?;
        }

        if lookup(ENV_NO_COLOR).is_some() {
            self.enable_color = false;
        }

        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = level.parse()?;
        }

        if let Some(format) = lookup(ENV_LOG_FORMAT) {
            self.log_format = format.parse()?;
        }

        Ok(())
    }
}

// Default value functions for serde
fn default_enable_color() -> bool {
    crate::defaults::DEFAULT_ENABLE_COLOR
}

fn default_log_level() -> LogLevel {
    crate::defaults::DEFAULT_LOG_LEVEL
}

fn default_log_format() -> LogFormat {
    crate::defaults::DEFAULT_LOG_FORMAT
}
