//! Baseline/subject grouping and per-record differencing
//!
//! A benchmark stream carries no explicit "before" and "after" labels. The
//! split is derived from content: scanning the documents from the end, a
//! document whose keys are all new joins the subject group, and every
//! document that repeats a subject key joins the baseline group. The
//! newest run is therefore compared against the run before it.

use crate::error::{AppError, Result};
use crate::logging::Logger;
use crate::models::record::{scalar_label, value_kind};
use crate::models::{DiffRecord, DiffReport, Document, PerfRecord};
use serde_yaml::{Mapping, Value};


/// The two accumulated groups of a stream
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupSplit {
    /// Group "a": everything older than the newest distinct key set
    pub baseline: Mapping,
    /// Group "b": the newest distinct key set
    pub subject: Mapping,
}

impl GroupSplit {
    /// Partition documents, scanning them newest first.
    ///
    /// A document joins the subject only when none of its keys is a subject
    /// key yet. Sharing a single key is enough to land in the baseline, even
    /// when the document also brings keys the subject lacks, so partially
    /// overlapping runs leave those extra subject keys without a baseline.
    ///
    /// Null documents are skipped; any other non-mapping document is rejected.
    pub fn from_documents(documents: &[Document]) -> Result<Self> {
        let mut split = Self::default();

        for (index, document) in documents.iter().enumerate().rev() {
            let mapping = match document {
                Value::Null => continue,
                Value::Mapping(mapping) => mapping,
                other => {
                    return Err(AppError::validation(format!(
                        "document {} is {}, expected a mapping of test names",
                        index + 1,
                        value_kind(other)
                    )))
                }
            };

            let target = if mapping.keys().any(|key| split.subject.contains_key(key)) {
                &mut split.baseline
            } else {
                &mut split.subject
            };
            merge_into(target, mapping);
        }

        Ok(split)
    }
}

/// Insert or overwrite every entry; existing keys keep their position
fn merge_into(target: &mut Mapping, source: &Mapping) {
    for (key, value) in source {
        target.insert(key.clone(), value.clone());
    }
}

/// Computes diff reports from parsed documents
pub struct DiffEngine {
    logger: Logger,
}

impl DiffEngine {
    pub fn new(logger: Logger) -> Self {
        Self { logger }
    }

    /// Split the stream and diff every subject key against the baseline
    pub fn difference(&self, documents: &[Document]) -> Result<DiffReport> {
        let split = GroupSplit::from_documents(documents)?;

        self.logger.debug("Split stream into baseline and subject groups")
            .field("documents", documents.len())
            .field("baseline_keys", split.baseline.len())
            .field("subject_keys", split.subject.len())
            .log();

        self.difference_of(&split)
    }

    /// Diff an already split stream
    pub fn difference_of(&self, split: &GroupSplit) -> Result<DiffReport> {
        let mut report = DiffReport::new();

        for (key, subject_records) in &split.subject {
            let label = scalar_label(key);
            let baseline_records = split.baseline.get(key)
                .ok_or_else(|| AppError::missing_group(label.clone()))?;

            let records = self.diff_records(&label, baseline_records, subject_records)?;
            self.logger.trace("Diffed key")
                .field("key", &label)
                .field("records", records.len())
                .log();
            report.push(label, records);
        }

        Ok(report)
    }

    /// Pair baseline and subject records by position.
    ///
    /// Sequences of different length are compared over the shorter one.
    pub fn diff_records(&self, key: &str, baseline: &Value, subject: &Value) -> Result<Vec<DiffRecord>> {
        let baseline = record_sequence(key, "baseline", baseline)?;
        let subject = record_sequence(key, "subject", subject)?;

        if baseline.len() != subject.len() {
            self.logger.warn("Record counts differ, comparing the common prefix only")
                .field("key", key)
                .field("baseline", baseline.len())
                .field("subject", subject.len())
                .log();
        }

        baseline.iter()
            .zip(subject.iter())
            .enumerate()
            .map(|(position, (a, b))| -> Result<DiffRecord> {
                let a = PerfRecord::from_value(a).map_err(|e| locate(e, key, "baseline", position))?;
                let b = PerfRecord::from_value(b).map_err(|e| locate(e, key, "subject", position))?;
                Ok(DiffRecord::between(&a, &b))
            })
            .collect()
    }
}

fn record_sequence<'a>(key: &str, group: &str, value: &'a Value) -> Result<&'a [Value]> {
    value.as_sequence()
        .map(Vec::as_slice)
        .ok_or_else(|| AppError::validation(format!(
            "{} value of '{}' is {}, expected a list of records",
            group,
            key,
            value_kind(value)
        )))
}

fn locate(error: AppError, key: &str, group: &str, position: usize) -> AppError {
    match error {
        AppError::Validation(msg) => AppError::validation(format!(
            "{} record {} of '{}': {}", group, position, key, msg
        )),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stream::parse_stream;

    fn engine() -> DiffEngine {
        DiffEngine::new(Logger::new("TEST"))
    }

    fn docs(yaml: &str) -> Vec<Document> {
        parse_stream(yaml).unwrap()
    }

    #[test]
    fn test_positional_alignment() {
        let documents = docs("\
---
test:
  - {xfer_size: 1, Gb/sec: 10, usec/xfer: 5}
---
test:
  - {xfer_size: 1, Gb/sec: 15, usec/xfer: 3}
");
        let report = engine().difference(&documents).unwrap();
        let records = report.get("test").unwrap();
        assert_eq!(records, &[DiffRecord {
            xfer_size: Value::from(1),
            gb_per_sec: 5.0,
            usec_per_xfer: -2.0,
        }]);
    }

    #[test]
    fn test_grouping_latest_is_subject() {
        let documents = docs("\
---
testA: [{xfer_size: 1, Gb/sec: 1, usec/xfer: 1}]
---
testA: [{xfer_size: 1, Gb/sec: 2, usec/xfer: 2}]
");
        let split = GroupSplit::from_documents(&documents).unwrap();
        assert_eq!(split.subject["testA"], documents[1]["testA"]);
        assert_eq!(split.baseline["testA"], documents[0]["testA"]);
    }

    #[test]
    fn test_grouping_merges_distinct_newest_documents() {
        // the two newest documents introduce distinct keys and form one run
        let documents = docs("\
---
a: [{xfer_size: 1, Gb/sec: 1, usec/xfer: 9}]
---
b: [{xfer_size: 1, Gb/sec: 1, usec/xfer: 9}]
---
a: [{xfer_size: 1, Gb/sec: 2, usec/xfer: 8}]
---
b: [{xfer_size: 1, Gb/sec: 3, usec/xfer: 7}]
");
        let split = GroupSplit::from_documents(&documents).unwrap();
        let subject_keys: Vec<&str> = split.subject.keys().filter_map(Value::as_str).collect();
        assert_eq!(subject_keys, vec!["b", "a"]);
        assert_eq!(split.baseline.len(), 2);

        let report = engine().difference_of(&split).unwrap();
        assert_eq!(report.entries[0].key, "b");
        assert_eq!(report.entries[0].records[0].gb_per_sec, 2.0);
        assert_eq!(report.entries[1].key, "a");
        assert_eq!(report.entries[1].records[0].usec_per_xfer, -1.0);
    }

    #[test]
    fn test_document_with_any_repeated_key_goes_to_baseline() {
        let documents = docs("\
---
x: [{xfer_size: 1, Gb/sec: 1, usec/xfer: 1}]
y: [{xfer_size: 1, Gb/sec: 1, usec/xfer: 1}]
---
x: [{xfer_size: 1, Gb/sec: 2, usec/xfer: 2}]
");
        let split = GroupSplit::from_documents(&documents).unwrap();
        assert_eq!(split.subject.len(), 1);
        assert!(split.baseline.contains_key("x"));
        assert!(split.baseline.contains_key("y"));
    }

    #[test]
    fn test_partial_key_overlap_goes_to_baseline() {
        let documents = docs("\
---
a: [{xfer_size: 1, Gb/sec: 1, usec/xfer: 1}]
b: [{xfer_size: 1, Gb/sec: 1, usec/xfer: 1}]
---
b: [{xfer_size: 1, Gb/sec: 2, usec/xfer: 2}]
c: [{xfer_size: 1, Gb/sec: 2, usec/xfer: 2}]
");
        let split = GroupSplit::from_documents(&documents).unwrap();
        let subject: Vec<&str> = split.subject.keys().filter_map(Value::as_str).collect();
        let baseline: Vec<&str> = split.baseline.keys().filter_map(Value::as_str).collect();
        assert_eq!(subject, vec!["b", "c"]);
        assert_eq!(baseline, vec!["a", "b"]);

        let error = engine().difference(&documents).unwrap_err();
        assert_eq!(error.to_string(), "Missing baseline group for key 'c'");
    }

    #[test]
    fn test_oldest_baseline_document_wins() {
        let documents = docs("\
---
t: [{xfer_size: 1, Gb/sec: 100, usec/xfer: 100}]
---
t: [{xfer_size: 1, Gb/sec: 10, usec/xfer: 10}]
---
t: [{xfer_size: 1, Gb/sec: 12, usec/xfer: 9}]
");
        // reverse scan merges the oldest document last, so it wins the baseline slot
        let report = engine().difference(&documents).unwrap();
        let record = &report.get("t").unwrap()[0];
        assert_eq!(record.gb_per_sec, -88.0);
        assert_eq!(record.usec_per_xfer, -91.0);
    }

    #[test]
    fn test_missing_baseline_key_is_fatal() {
        let documents = docs("\
---
old: [{xfer_size: 1, Gb/sec: 1, usec/xfer: 1}]
---
old: [{xfer_size: 1, Gb/sec: 1, usec/xfer: 1}]
new: [{xfer_size: 1, Gb/sec: 1, usec/xfer: 1}]
");
        let error = engine().difference(&documents).unwrap_err();
        assert!(matches!(error, AppError::MissingGroup(ref key) if key == "new"));
    }

    #[test]
    fn test_single_run_has_no_baseline() {
        let documents = docs("only: [{xfer_size: 1, Gb/sec: 1, usec/xfer: 1}]\n");
        let error = engine().difference(&documents).unwrap_err();
        assert_eq!(error.category(), "GROUP");
    }

    #[test]
    fn test_length_mismatch_truncates_to_shorter() {
        let documents = docs("\
---
t:
  - {xfer_size: 64, Gb/sec: 1, usec/xfer: 4}
  - {xfer_size: 128, Gb/sec: 2, usec/xfer: 5}
  - {xfer_size: 256, Gb/sec: 3, usec/xfer: 6}
---
t:
  - {xfer_size: 64, Gb/sec: 2, usec/xfer: 3}
  - {xfer_size: 128, Gb/sec: 2, usec/xfer: 5}
");
        let report = engine().difference(&documents).unwrap();
        let records = report.get("t").unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].xfer_size, Value::from(128));
        assert_eq!(records[1].gb_per_sec, 0.0);
    }

    #[test]
    fn test_xfer_size_copied_from_subject() {
        let documents = docs("\
---
t: [{xfer_size: 1k, Gb/sec: 1, usec/xfer: 1}]
---
t: [{xfer_size: 2k, Gb/sec: 1, usec/xfer: 1}]
");
        let report = engine().difference(&documents).unwrap();
        assert_eq!(report.get("t").unwrap()[0].xfer_size, Value::from("2k"));
    }

    #[test]
    fn test_null_documents_are_skipped() {
        let documents = docs("\
---
t: [{xfer_size: 1, Gb/sec: 1, usec/xfer: 1}]
---
---
t: [{xfer_size: 1, Gb/sec: 3, usec/xfer: 1}]
");
        let report = engine().difference(&documents).unwrap();
        assert_eq!(report.get("t").unwrap()[0].gb_per_sec, 2.0);
    }

    #[test]
    fn test_non_mapping_document_rejected() {
        let documents = docs("---\n- 1\n- 2\n");
        let error = engine().difference(&documents).unwrap_err();
        assert_eq!(error.category(), "VALIDATION");
        assert!(error.to_string().contains("document 1 is a sequence"));
    }

    #[test]
    fn test_non_sequence_value_rejected() {
        let documents = docs("---\nt: 5\n---\nt: 6\n");
        let error = engine().difference(&documents).unwrap_err();
        assert!(error.to_string().contains("expected a list of records"));
    }

    #[test]
    fn test_missing_field_reports_position() {
        let documents = docs("\
---
t: [{xfer_size: 1, Gb/sec: 1, usec/xfer: 1}]
---
t: [{xfer_size: 1, Gb/sec: 1}]
");
        let error = engine().difference(&documents).unwrap_err();
        assert_eq!(error.category(), "VALIDATION");
        assert!(error.to_string().contains("subject record 0 of 't'"));
    }

    #[test]
    fn test_empty_stream_yields_empty_report() {
        let report = engine().difference(&[]).unwrap();
        assert!(report.is_empty());
    }
}
