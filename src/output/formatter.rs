//! Core formatting trait and plain text implementation

use crate::{
    error::Result,
    models::{record::scalar_label, DiffRecord, DiffReport, Document},
};
use std::fmt::Write as _;

/// Main trait for output formatting
pub trait OutputFormatter {
    /// Format one parsed document
    fn format_document(&self, document: &Document) -> Result<String>;

    /// Format the heading line of one diff entry
    fn format_key(&self, key: &str) -> String;

    /// Format one diff record line
    fn format_diff_record(&self, record: &DiffRecord) -> String;

    /// Format every document of a stream, in order
    fn format_documents(&self, documents: &[Document]) -> Result<String> {
        let mut output = String::new();
        for document in documents {
            output.push_str(&self.format_document(document)?);
        }
        Ok(output)
    }

    /// Format a complete diff report
    fn format_diff_report(&self, report: &DiffReport) -> Result<String> {
        let mut output = String::new();
        for entry in &report.entries {
            writeln!(output, "{}", self.format_key(&entry.key))?;
            for record in &entry.records {
                writeln!(output, "{}", self.format_diff_record(record))?;
            }
        }
        Ok(output)
    }
}

/// Signed fixed-point rendering used for every delta (`+1.250000`, `+0.000000`)
pub fn signed_fixed(value: f64) -> String {
    // -0.0 + 0.0 is +0.0
    format!("{:+.6}", value + 0.0)
}

/// Plain text formatter implementation
#[derive(Debug, Clone, Default)]
pub struct PlainFormatter;

impl PlainFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl OutputFormatter for PlainFormatter {
    fn format_document(&self, document: &Document) -> Result<String> {
        let body = serde_yaml::to_string(document)?;
        Ok(format!("---\n{}", body))
    }

    fn format_key(&self, key: &str) -> String {
        format!("{} :", key)
    }

    fn format_diff_record(&self, record: &DiffRecord) -> String {
        format!(
            "xfer_size:  {} , Gb/sec: {} , usec/xfer: {}",
            scalar_label(&record.xfer_size),
            signed_fixed(record.gb_per_sec),
            signed_fixed(record.usec_per_xfer)
        )
    }
}
