//! Benchmark record and diff record data models

use crate::error::{AppError, Result};
use serde::{Deserialize, Serialize};
use serde_yaml::Value;

/// Transfer size field name
pub const XFER_SIZE: &str = "xfer_size";
/// Throughput field name
pub const THROUGHPUT: &str = "Gb/sec";
/// Latency field name
pub const LATENCY: &str = "usec/xfer";

/// One parsed document of the input stream
pub type Document = Value;

/// The fields of one benchmark measurement that take part in a diff.
///
/// Benchmark binaries emit more fields per record (`name`, `iterations`,
/// `total`, `time`, `Mmsg/s`, ...); they are ignored here and only
/// surface through the verbatim printer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerfRecord {
    /// Transfer size, kept as written (`64`, `"1k"`, ...)
    pub xfer_size: Value,

    /// Throughput in gigabits per second
    #[serde(rename = "Gb/sec")]
    pub gb_per_sec: f64,

    /// Latency in microseconds per transfer
    #[serde(rename = "usec/xfer")]
    pub usec_per_xfer: f64,
}

impl PerfRecord {
    /// Extract the diffed fields from a raw record
    pub fn from_value(value: &Value) -> Result<Self> {
        if !value.is_mapping() {
            return Err(AppError::validation(format!(
                "expected a record mapping, found {}", value_kind(value)
            )));
        }

        serde_yaml::from_value(value.clone())
            .map_err(|e| AppError::validation(e.to_string()))
    }
}

/// Subject record minus baseline record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiffRecord {
    /// Transfer size copied from the subject record
    pub xfer_size: Value,

    /// Throughput delta (subject - baseline)
    #[serde(rename = "Gb/sec")]
    pub gb_per_sec: f64,

    /// Latency delta (subject - baseline)
    #[serde(rename = "usec/xfer")]
    pub usec_per_xfer: f64,
}

impl DiffRecord {
    /// Build the delta of `subject` against `baseline`
    pub fn between(baseline: &PerfRecord, subject: &PerfRecord) -> Self {
        Self {
            xfer_size: subject.xfer_size.clone(),
            gb_per_sec: subject.gb_per_sec - baseline.gb_per_sec,
            usec_per_xfer: subject.usec_per_xfer - baseline.usec_per_xfer,
        }
    }
}

/// Diff records of one test name
#[derive(Debug, Clone, PartialEq)]
pub struct DiffEntry {
    /// Test name the records belong to
    pub key: String,
    /// Positionally paired deltas
    pub records: Vec<DiffRecord>,
}

/// Ordered result of a diff run, one entry per subject key
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DiffReport {
    pub entries: Vec<DiffEntry>,
}

impl DiffReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: String, records: Vec<DiffRecord>) {
        self.entries.push(DiffEntry { key, records });
    }

    pub fn get(&self, key: &str) -> Option<&[DiffRecord]> {
        self.entries.iter()
            .find(|entry| entry.key == key)
            .map(|entry| entry.records.as_slice())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Render a scalar for display; collections fall back to inline YAML
pub fn scalar_label(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        other => serde_yaml::to_string(other)
            .map(|s| s.trim_end().replace('\n', " "))
            .unwrap_or_else(|_| value_kind(other).to_string()),
    }
}

/// Short description of a value's type for error messages
pub fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
