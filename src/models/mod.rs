//! Data models for benchmark documents, diffs and configuration

pub mod config;
pub mod record;

// Re-export main model types
pub use config::Config;
pub use record::{Document, PerfRecord, DiffRecord, DiffEntry, DiffReport};
