//! Main application orchestration: read, parse, diff, print

use crate::{
    config::Config,
    diff::DiffEngine,
    error::{AppError, Result},
    input::InputSource,
    logging::Logger,
    output::{OutputFormatter, OutputFormatterFactory},
    stream::parse_stream,
};
use std::io::Write;

/// Main application struct that coordinates all components
pub struct App {
    config: Config,
    logger: Logger,
    formatter: Box<dyn OutputFormatter>,
}

impl App {
    /// Create a new application instance from a finished configuration
    pub fn new(config: Config) -> Self {
        let logger = Logger::with_config("APP", &config);
        let formatter = OutputFormatterFactory::create_formatter(config.enable_color);
        Self { config, logger, formatter }
    }

    /// Run the application against the configured input, printing to stdout
    pub fn run(&self) -> Result<()> {
        let stdout = std::io::stdout();
        self.run_to(&mut stdout.lock())
    }

    /// Run the application, writing the report to `out`
    pub fn run_to<W: Write>(&self, out: &mut W) -> Result<()> {
        if !self.config.has_output() {
            crate::log_debug!(self.logger, "Neither diff nor verbatim output requested");
            return Ok(());
        }

        let source = InputSource::from_paths(&self.config.inputs);
        self.logger.debug("Reading input")
            .field("source", source.describe())
            .log();

        let text = source.read_to_string()?;
        let report = self.render(&text)?;

        out.write_all(report.as_bytes())
            .and_then(|_| out.flush())
            .map_err(|e| AppError::output(e.to_string()))?;

        self.logger.info("Report written")
            .field("bytes", report.len())
            .log();
        Ok(())
    }

    /// Produce the complete textual report for an input stream.
    ///
    /// Nothing is returned unless every requested section succeeded.
    pub fn render(&self, text: &str) -> Result<String> {
        let documents = parse_stream(text)?;
        self.logger.debug("Parsed input stream")
            .field("bytes", text.len())
            .field("documents", documents.len())
            .log();

        let mut output = String::new();

        if self.config.diff {
            let engine = DiffEngine::new(self.logger.named("DIFF"));
            let report = engine.difference(&documents)?;
            self.logger.debug("Computed diff")
                .field("keys", report.len())
                .log();
            output.push_str(&self.formatter.format_diff_report(&report)?);
        }

        if self.config.verbatim {
            output.push_str(&self.formatter.format_documents(&documents)?);
        }

        Ok(output)
    }
}
