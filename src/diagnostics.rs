/// Diagnostic reporting for failures the helpers swallow
use lazy_static::lazy_static;
use std::fmt::Display;
use std::sync::{Arc, Mutex};
use tracing::error;

/// Label every diagnostic record starts with
pub const ERROR_LABEL: &str = "Error:";

lazy_static! {
    static ref DEFAULT_REPORTER: Arc<dyn ErrorReporter> = Arc::new(TracingReporter);
}

/// Destination for failure values that are not propagated to the caller.
///
/// Each call to `report` writes exactly one record. Implementations must be
/// shareable across tasks since a single client may be used concurrently.
pub trait ErrorReporter: Send + Sync {
    fn report(&self, error: &dyn Display);
}

/// Shared process-wide reporter used when no other reporter is injected
pub fn default_reporter() -> Arc<dyn ErrorReporter> {
    Arc::clone(&DEFAULT_REPORTER)
}

/// Render the record text for a failure
pub fn format_record(error: &dyn Display) -> String {
    format!("{} {}", ERROR_LABEL, error)
}

/// Writes each failure as a single `error` level tracing event
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl ErrorReporter for TracingReporter {
    fn report(&self, error: &dyn Display) {
        error!("{}", format_record(error));
    }
}

/// Keeps records in memory so they can be inspected later
#[derive(Debug, Default)]
pub struct MemoryReporter {
    records: Mutex<Vec<String>>,
}

impl MemoryReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all records written so far
    pub fn records(&self) -> Vec<String> {
        match self.records.lock() {
            Ok(records) => records.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn len(&self) -> usize {
        self.records().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ErrorReporter for MemoryReporter {
    fn report(&self, error: &dyn Display) {
        let record = format_record(error);
        match self.records.lock() {
            Ok(mut records) => records.push(record),
            Err(poisoned) => poisoned.into_inner().push(record),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_is_labelled() {
        assert_eq!(format_record(&"boom"), "Error: boom");
    }

    #[test]
    fn test_memory_reporter_keeps_one_record_per_report() {
        let reporter = MemoryReporter::new();
        assert!(reporter.is_empty());

        reporter.report(&"first");
        reporter.report(&format!("status {}", 404));

        assert_eq!(
            reporter.records(),
            vec!["Error: first".to_string(), "Error: status 404".to_string()]
        );
    }

    #[test]
    fn test_default_reporter_is_shared() {
        let a = default_reporter();
        let b = default_reporter();
        assert!(Arc::ptr_eq(&a, &b));
        a.report(&"logged through tracing");
    }
}
