//! Output formatting and display system
//!
//! Diff reports and verbatim documents are rendered through one
//! `OutputFormatter` trait with plain and colored implementations.

mod formatter;
mod colored;

pub use self::formatter::{
    OutputFormatter,
    PlainFormatter,
    signed_fixed,
};
pub use self::colored::{
    ColoredFormatter,
    ColorScheme,
    Trend,
};

/// Output formatting factory for creating appropriate formatters
pub struct OutputFormatterFactory;

impl OutputFormatterFactory {
    /// Create a formatter based on color support
    pub fn create_formatter(enable_color: bool) -> Box<dyn OutputFormatter> {
        if enable_color {
            Box::new(ColoredFormatter::new())
        } else {
            Box::new(PlainFormatter::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DiffRecord;
    use serde_yaml::Value;

    #[test]
    fn test_plain_factory_output() {
        let formatter = OutputFormatterFactory::create_formatter(false);
        let line = formatter.format_diff_record(&DiffRecord {
            xfer_size: Value::from(8),
            gb_per_sec: 0.5,
            usec_per_xfer: 0.25,
        });
        assert_eq!(line, "xfer_size:  8 , Gb/sec: +0.500000 , usec/xfer: +0.250000");
    }

    #[test]
    fn test_factory_key_text() {
        let plain = OutputFormatterFactory::create_formatter(false);
        assert_eq!(plain.format_key("rdm_pingpong"), "rdm_pingpong :");

        let colored = OutputFormatterFactory::create_formatter(true);
        assert!(colored.format_key("rdm_pingpong").contains("rdm_pingpong"));
    }
}
