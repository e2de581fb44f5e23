//! Configuration parsing from CLI arguments and environment variables

use crate::{
    cli::{supports_color, Cli},
    config::env::EnvManager,
    error::{AppError, Result},
    logging::Logger,
    models::Config,
};

/// Configuration parser that combines CLI arguments with environment variables
pub struct ConfigParser {
    cli: Cli,
    terminal_color: bool,
}

impl ConfigParser {
    /// Create a new configuration parser with CLI arguments
    pub fn new(cli: Cli) -> Self {
        Self {
            cli,
            terminal_color: supports_color(),
        }
    }

    /// Override terminal color detection
    pub fn with_terminal_color(mut self, terminal_color: bool) -> Self {
        self.terminal_color = terminal_color;
        self
    }

    /// Parse and build the complete configuration
    pub fn parse(&self) -> Result<Config> {
        self.load_env_file()?;
        self.parse_with(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an explicit variable source
    pub fn parse_with<F>(&self, lookup: F) -> Result<Config>
    where
        F: Fn(&str) -> Option<String>,
    {
        self.cli.validate().map_err(AppError::config)?;

        let mut config = Config::default();
        config.merge_from_lookup(lookup)?;
        self.apply_cli_overrides(&mut config)?;
        config.validate()?;

        Ok(config)
    }

    /// Load .env file if it exists, warning about entries that will not parse
    fn load_env_file(&self) -> Result<()> {
        let logger = Logger::new("CONFIG");
        for warning in EnvManager::load_env_file()? {
            logger.warn("Invalid entry in .env file")
                .field("detail", warning)
                .log();
        }
        Ok(())
    }

    /// Apply CLI argument overrides to configuration
    fn apply_cli_overrides(&self, config: &mut Config) -> Result<()> {
        config.inputs = self.cli.files.clone();
        config.diff = self.cli.diff;
        config.verbatim = self.cli.verbatim;
        config.debug = self.cli.debug;

        config.enable_color = match self.cli.color_override() {
            Some(forced) => forced,
            None => config.enable_color && self.terminal_color,
        };

        if let Some(ref level) = self.cli.log_level {
            config.log_level = level.parse()?;
        }

        if let Some(ref format) = self.cli.log_format {
            config.log_format = format.parse()?;
        }

        Ok(())
    }
}

/// Convenience function to load complete configuration from CLI arguments
pub fn load_config(cli: Cli) -> Result<Config> {
    ConfigParser::new(cli).parse()
}

/// Display configuration summary for debug purposes
pub fn display_config_summary(config: &Config) -> String {
    let mut summary = Vec::new();

    let inputs = if config.reads_stdin() {
        "<stdin>".to_string()
    } else {
        config.inputs.iter()
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join(", ")
    };

    summary.push(format!("Inputs: {}", inputs));
    summary.push(format!("Diff: {}", config.diff));
    summary.push(format!("Verbatim: {}", config.verbatim));
    summary.push(format!("Color Output: {}", config.enable_color));
    summary.push(format!("Log Level: {}", config.log_level.as_str()));
    summary.push(format!("Log Format: {:?}", config.log_format));
    summary.push(format!("Debug: {}", config.debug));

    summary.join("\n")
}
