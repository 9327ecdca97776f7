use super::*;

// ============================================================================
// Severity tests
// ============================================================================

#[test]
fn test_severity_ordering() {
    assert!(LogSeverity::Trace < LogSeverity::Debug);
    assert!(LogSeverity::Debug < LogSeverity::Info);
    assert!(LogSeverity::Info < LogSeverity::Warn);
    assert!(LogSeverity::Warn < LogSeverity::Error);
}

#[test]
fn test_severity_copy_and_eq() {
    let a = LogSeverity::Info;
    let b = a;
    assert_eq!(a, b);
    assert_ne!(LogSeverity::Warn, LogSeverity::Error);
}

// ============================================================================
// LogEntry tests
// ============================================================================

#[test]
fn test_entry_without_location() {
    let entry = LogEntry {
        severity: LogSeverity::Info,
        timestamp: std::time::SystemTime::now(),
        source: "astra::test".to_string(),
        message: "hello".to_string(),
        file: None,
        line: None,
    };
    assert_eq!(entry.source, "astra::test");
    assert!(entry.file.is_none());
    assert!(entry.line.is_none());
}

#[test]
fn test_entry_clone_preserves_location() {
    let entry = LogEntry {
        severity: LogSeverity::Error,
        timestamp: std::time::SystemTime::now(),
        source: "astra::test".to_string(),
        message: "boom".to_string(),
        file: Some("some_file.rs"),
        line: Some(7),
    };
    let cloned = entry.clone();
    assert_eq!(cloned.file, Some("some_file.rs"));
    assert_eq!(cloned.line, Some(7));
    assert_eq!(cloned.severity, LogSeverity::Error);
}

// ============================================================================
// DefaultLogger smoke test
// ============================================================================

#[test]
fn test_default_logger_does_not_panic() {
    let logger = DefaultLogger;
    logger.log(&LogEntry {
        severity: LogSeverity::Debug,
        timestamp: std::time::SystemTime::now(),
        source: "astra::test".to_string(),
        message: "smoke".to_string(),
        file: None,
        line: None,
    });
    logger.log(&LogEntry {
        severity: LogSeverity::Error,
        timestamp: std::time::SystemTime::now(),
        source: "astra::test".to_string(),
        message: "smoke with location".to_string(),
        file: Some("log_tests.rs"),
        line: Some(1),
    });
}
