//! Environment variable handling and .env file management

use crate::error::{AppError, Result};
use crate::logging::{LogFormat, LogLevel};
use crate::models::config::{ENV_COLOR, ENV_LOG_FORMAT, ENV_LOG_LEVEL, ENV_NO_COLOR};
use std::fs;
use std::path::Path;

/// Environment variable configuration manager
pub struct EnvManager;

impl EnvManager {
    /// Load .env file from the current directory if it exists
    pub fn load_env_file() -> Result<Vec<String>> {
        Self::load_env_file_from(Path::new(".env"))
    }

    /// Load a specific env file if it exists; variables already set win.
    ///
    /// Returns a warning for every entry that would not parse.
    pub fn load_env_file_from(path: &Path) -> Result<Vec<String>> {
        if !path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| AppError::config(format!("{}: {}", path.display(), e)))?;
        let warnings = Self::check_env_content(&content);

        dotenv::from_path(path)?;
        Ok(warnings)
    }

    /// Validate environment variable format before parsing
    pub fn validate_env_var(key: &str, value: &str) -> Result<()> {
        match key {
            k if k == ENV_COLOR => {
                value.trim().parse::<bool>()
                    .map_err(|e| AppError::config(format!("Invalid {} value '{}': {}", ENV_COLOR, value, e)))?;
            }
            k if k == ENV_LOG_LEVEL => {
                value.parse::<LogLevel>()?;
            }
            k if k == ENV_LOG_FORMAT => {
                value.parse::<LogFormat>()?;
            }
            _ => {
                // Unknown environment variable, ignore
            }
        }

        Ok(())
    }

    /// Get list of all supported environment variables with descriptions
    pub fn get_supported_env_vars() -> Vec<(&'static str, &'static str, &'static str)> {
        vec![
            (ENV_COLOR, "Enable colored output on terminals", "true"),
            (ENV_LOG_LEVEL, "Minimum log level written to stderr", "warn"),
            (ENV_LOG_FORMAT, "Log line format (console, json, compact)", "console"),
            (ENV_NO_COLOR, "Disable colored output when set to any value", "1"),
        ]
    }

    /// Display environment variable help
    pub fn display_env_help() -> String {
        let mut help = String::new();
        help.push_str("Supported Environment Variables:\n\n");

        for (var, description, example) in Self::get_supported_env_vars() {
            help.push_str(&format!("  {:<20} {}\n", var, description));
            help.push_str(&format!("  {:<20} Example: {}\n\n", "", example));
        }

        help.push_str("Configuration Priority (highest to lowest):\n");
        help.push_str("  1. Command-line arguments\n");
        help.push_str("  2. Environment variables\n");
        help.push_str("  3. .env file values\n");
        help.push_str("  4. Default values\n");

        help
    }

    /// Validate env file contents line by line, returning warnings
    pub fn check_env_content(content: &str) -> Vec<String> {
        let mut warnings = Vec::new();

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let line = line.strip_prefix("export ").unwrap_or(line);
            if let Some((key, value)) = line.split_once('=') {
                let value = value.trim().trim_matches(|c| c == '"' || c == '\'');
                if let Err(e) = Self::validate_env_var(key.trim(), value) {
                    warnings.push(format!("Line '{}': {}", line, e));
                }
            }
        }

        warnings
    }
}
