//! Unit tests for log.rs
//!
//! Tests Logger trait, LogEntry, LogSeverity, format_entry and DefaultLogger.

use crate::log::{format_entry, DefaultLogger, LogEntry, LogSeverity, Logger};
use std::time::SystemTime;

fn entry(severity: LogSeverity, file: Option<&'static str>, line: Option<u32>) -> LogEntry {
    LogEntry {
        severity,
        timestamp: SystemTime::now(),
        source: "gls::Object".to_string(),
        message: "name 3 released".to_string(),
        file,
        line,
    }
}

// ============================================================================
// LOG SEVERITY TESTS
// ============================================================================

#[test]
fn test_log_severity_ordering() {
    assert!(LogSeverity::Trace < LogSeverity::Debug);
    assert!(LogSeverity::Debug < LogSeverity::Info);
    assert!(LogSeverity::Info < LogSeverity::Warn);
    assert!(LogSeverity::Warn < LogSeverity::Error);
}

#[test]
fn test_log_severity_labels_are_fixed_width() {
    for severity in [
        LogSeverity::Trace,
        LogSeverity::Debug,
        LogSeverity::Info,
        LogSeverity::Warn,
        LogSeverity::Error,
    ] {
        assert_eq!(severity.label().len(), 5);
    }
    assert_eq!(LogSeverity::Warn.label(), "WARN ");
}

#[test]
fn test_log_severity_copy() {
    let sev1 = LogSeverity::Info;
    let sev2 = sev1;
    assert_eq!(sev1, sev2);
}

// ============================================================================
// FORMAT TESTS
// ============================================================================

#[test]
fn test_format_entry_without_location() {
    let text = format_entry(&entry(LogSeverity::Info, None, None));
    assert!(text.contains("[INFO ]"));
    assert!(text.contains("[gls::Object]"));
    assert!(text.ends_with("name 3 released"));
}

#[test]
fn test_format_entry_with_location() {
    let text = format_entry(&entry(LogSeverity::Error, Some("buffer.rs"), Some(42)));
    assert!(text.contains("[ERROR]"));
    assert!(text.ends_with("name 3 released (buffer.rs:42)"));
}

#[test]
fn test_format_entry_needs_both_file_and_line() {
    let text = format_entry(&entry(LogSeverity::Error, Some("buffer.rs"), None));
    assert!(!text.contains("buffer.rs"));
}

#[test]
fn test_format_entry_timestamp_shape() {
    let text = format_entry(&entry(LogSeverity::Debug, None, None));
    // [YYYY-MM-DD HH:MM:SS.mmm]
    let close = text.find(']').unwrap();
    assert_eq!(close, 24);
    assert_eq!(&text[5..6], "-");
    assert_eq!(&text[20..21], ".");
}

// ============================================================================
// DEFAULT LOGGER TESTS
// ============================================================================

#[test]
fn test_default_logger_all_severities() {
    let logger = DefaultLogger;

    // Just verify none of the branches panic
    for severity in [
        LogSeverity::Trace,
        LogSeverity::Debug,
        LogSeverity::Info,
        LogSeverity::Warn,
        LogSeverity::Error,
    ] {
        logger.log(&entry(severity, None, None));
        logger.log(&entry(severity, Some("test.rs"), Some(7)));
    }
}

#[test]
fn test_logger_trait_is_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<DefaultLogger>();
}

// ============================================================================
// LOGGER TRAIT TESTS
// ============================================================================

struct CountingLogger {
    logged_count: std::sync::Mutex<usize>,
}

impl Logger for CountingLogger {
    fn log(&self, _entry: &LogEntry) {
        *self.logged_count.lock().unwrap() += 1;
    }
}

#[test]
fn test_custom_logger_implementation() {
    let logger = CountingLogger { logged_count: std::sync::Mutex::new(0) };

    logger.log(&entry(LogSeverity::Info, None, None));
    logger.log(&entry(LogSeverity::Warn, None, None));

    assert_eq!(*logger.logged_count.lock().unwrap(), 2);
}

#[test]
fn test_log_entry_clone() {
    let entry1 = entry(LogSeverity::Warn, Some("test.rs"), Some(10));
    let entry2 = entry1.clone();

    assert_eq!(entry1.severity, entry2.severity);
    assert_eq!(entry1.source, entry2.source);
    assert_eq!(entry1.message, entry2.message);
    assert_eq!(entry1.file, entry2.file);
    assert_eq!(entry1.line, entry2.line);
}
