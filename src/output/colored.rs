//! Colored formatter implementation with terminal color support
//!
//! Text content is identical to the plain formatter; only ANSI styling is
//! added, so scripts parsing the plain layout keep working on a terminal.

use super::formatter::{signed_fixed, OutputFormatter, PlainFormatter};
use crate::{
    error::Result,
    models::{record::scalar_label, DiffRecord, Document},
};
use colored::*;

/// Whether a delta is an improvement, a regression or unchanged
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Improved,
    Regressed,
    Unchanged,
}

impl Trend {
    /// Classify a throughput delta; more is better
    pub fn of_throughput(delta: f64) -> Self {
        if delta > 0.0 {
            Self::Improved
        } else if delta < 0.0 {
            Self::Regressed
        } else {
            Self::Unchanged
        }
    }

    /// Classify a latency delta; less is better
    pub fn of_latency(delta: f64) -> Self {
        match Self::of_throughput(delta) {
            Self::Improved => Self::Regressed,
            Self::Regressed => Self::Improved,
            Self::Unchanged => Self::Unchanged,
        }
    }

    /// Get color for this trend
    pub fn color(&self) -> Option<Color> {
        match self {
            Self::Improved => Some(Color::Green),
            Self::Regressed => Some(Color::Red),
            Self::Unchanged => None,
        }
    }
}

/// Color scheme configuration
#[derive(Debug, Clone)]
pub struct ColorScheme {
    pub key: Color,
    pub label: Color,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self {
            key: Color::Cyan,
            label: Color::BrightBlack,
        }
    }
}

/// Colored formatter
pub struct ColoredFormatter {
    plain: PlainFormatter,
    scheme: ColorScheme,
}

impl ColoredFormatter {
    pub fn new() -> Self {
        Self::with_scheme(ColorScheme::default())
    }

    pub fn with_scheme(scheme: ColorScheme) -> Self {
        Self {
            plain: PlainFormatter::new(),
            scheme,
        }
    }

    fn paint_delta(&self, delta: f64, trend: Trend) -> String {
        let text = signed_fixed(delta);
        match trend.color() {
            Some(color) => text.color(color).bold().to_string(),
            None => text,
        }
    }

    fn paint_label(&self, label: &str) -> String {
        label.color(self.scheme.label).to_string()
    }
}

impl Default for ColoredFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputFormatter for ColoredFormatter {
    fn format_document(&self, document: &Document) -> Result<String> {
        self.plain.format_document(document)
    }

    fn format_key(&self, key: &str) -> String {
        format!("{} :", key.color(self.scheme.key).bold())
    }

    fn format_diff_record(&self, record: &DiffRecord) -> String {
        format!(
            "{}  {} , {} {} , {} {}",
            self.paint_label("xfer_size:"),
            scalar_label(&record.xfer_size),
            self.paint_label("Gb/sec:"),
            self.paint_delta(record.gb_per_sec, Trend::of_throughput(record.gb_per_sec)),
            self.paint_label("usec/xfer:"),
            self.paint_delta(record.usec_per_xfer, Trend::of_latency(record.usec_per_xfer))
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_yaml::Value;

    #[test]
    fn test_trend_classification() {
        assert_eq!(Trend::of_throughput(1.0), Trend::Improved);
        assert_eq!(Trend::of_throughput(-1.0), Trend::Regressed);
        assert_eq!(Trend::of_throughput(0.0), Trend::Unchanged);
        assert_eq!(Trend::of_latency(1.0), Trend::Regressed);
        assert_eq!(Trend::of_latency(-1.0), Trend::Improved);
        assert_eq!(Trend::of_latency(0.0), Trend::Unchanged);
    }

    #[test]
    fn test_trend_colors() {
        assert_eq!(Trend::Improved.color(), Some(Color::Green));
        assert_eq!(Trend::Regressed.color(), Some(Color::Red));
        assert_eq!(Trend::Unchanged.color(), None);
    }

    #[test]
    fn test_colored_record_keeps_values() {
        let formatter = ColoredFormatter::new();
        let line = formatter.format_diff_record(&DiffRecord {
            xfer_size: Value::from(256),
            gb_per_sec: -0.75,
            usec_per_xfer: 0.0,
        });
        assert!(line.contains("256"));
        assert!(line.contains("-0.750000"));
        assert!(line.contains("+0.000000"));
    }

    #[test]
    fn test_colored_document_matches_plain() {
        let document: Document = serde_yaml::from_str("a: [1, 2]\n").unwrap();
        let colored = ColoredFormatter::new().format_document(&document).unwrap();
        let plain = PlainFormatter::new().format_document(&document).unwrap();
        assert_eq!(colored, plain);
    }
}
