//! Benchmark Report Differ
//!
//! Reads YAML streams of benchmark results (test name to a list of
//! records with transfer size, throughput and latency), pretty-prints
//! them, or subtracts the previous run from the newest one.

pub mod app;
pub mod cli;
pub mod config;
pub mod diff;
pub mod error;
pub mod input;
pub mod logging;
pub mod models;
pub mod output;
pub mod stream;

// Re-export commonly used types
pub use error::{AppError, Result};
pub use models::{Config, Document, PerfRecord, DiffRecord, DiffReport};
pub use diff::{DiffEngine, GroupSplit};
pub use output::{OutputFormatter, ColoredFormatter, PlainFormatter, OutputFormatterFactory};
pub use stream::parse_stream;

/// Application version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
pub const PKG_DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Build metadata exported by build.rs
pub const BUILD_TIME: &str = env!("BUILD_TIME");
pub const GIT_COMMIT: Option<&str> = option_env!("GIT_COMMIT");

/// Default configuration values
pub mod defaults {
    use crate::logging::{LogFormat, LogLevel};

    pub const DEFAULT_ENABLE_COLOR: bool = true;
    pub const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Warn;
    pub const DEFAULT_LOG_FORMAT: LogFormat = LogFormat::Console;
}
