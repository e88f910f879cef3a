//! Integration tests for the diagnostics layer
//!
//! These tests verify:
//! - Fan-out filtering across loggers with different thresholds
//! - Partial-failure aggregation
//! - Facade and forwarding delivery
//! - File and JSON output
//! - Configuration seeding of logger thresholds

use parking_lot::Mutex;
use rust_diagnostics::core::config::MapConfiguration;
use rust_diagnostics::core::distributed_logger::DistributedLogger;
use rust_diagnostics::core::error::{LoggerError, LOGGING_FAILURE_MESSAGE};
use rust_diagnostics::core::log_level::LogLevel;
use rust_diagnostics::core::log_message::LogMessage;
use rust_diagnostics::core::logger::Logger;
use rust_diagnostics::core::timestamp::TimestampFormat;
use rust_diagnostics::loggers::{FileLogger, JsonLogger, MemoryLogger, NullLogger};
use rust_diagnostics::{
    DebugLogTemplate, DiagnosticsConfigurationKeys, FieldValue, FormatProvider, LogForwardingPipe,
    LogMessagesFromRemote, SystemDiagnostics,
};
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;

type Shared<L> = Arc<Mutex<L>>;

fn shared(level: LogLevel) -> Shared<MemoryLogger> {
    Arc::new(Mutex::new(MemoryLogger::new(level)))
}

/// Logger that records every attempted write and then fails it
struct FailingLogger {
    level: LogLevel,
    attempts: usize,
}

impl FailingLogger {
    fn new(level: LogLevel) -> Shared<Self> {
        Arc::new(Mutex::new(Self { level, attempts: 0 }))
    }
}

impl Logger for FailingLogger {
    fn level(&self) -> LogLevel {
        self.level
    }

    fn set_level(&mut self, level: LogLevel) {
        self.level = level;
    }

    fn log(&mut self, _message: &LogMessage) -> rust_diagnostics::Result<()> {
        self.attempts += 1;
        Err(LoggerError::writer(format!("attempt {}", self.attempts)))
    }

    fn close(&mut self) -> rust_diagnostics::Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "failing"
    }
}

#[test]
fn test_fan_out_filters_per_logger() {
    let debug = shared(LogLevel::Debug);
    let info = shared(LogLevel::Info);
    let mut logger = DistributedLogger::new(vec![
        Box::new(Arc::clone(&debug)),
        Box::new(Arc::clone(&info)),
    ]);

    assert_eq!(logger.level(), LogLevel::Debug);

    let trace = LogMessage::new(LogLevel::Trace, "trace").expect("valid message");
    assert!(!logger.should_log(&trace));
    logger.log(&trace).expect("trace is a no-op");
    assert!(debug.lock().messages().is_empty());
    assert!(info.lock().messages().is_empty());

    logger
        .log(&LogMessage::new(LogLevel::Debug, "debug").expect("valid message"))
        .expect("debug delivered");
    assert_eq!(debug.lock().messages().len(), 1);
    assert!(info.lock().messages().is_empty());

    logger
        .log(&LogMessage::new(LogLevel::Info, "info").expect("valid message"))
        .expect("info delivered");
    assert_eq!(debug.lock().messages().len(), 2);
    assert_eq!(info.lock().messages().len(), 1);
    assert_eq!(info.lock().last().map(|m| m.text()), Some("info"));
}

#[test]
fn test_absent_message_is_ignored() {
    let memory = shared(LogLevel::Trace);
    let mut logger = DistributedLogger::new(vec![Box::new(Arc::clone(&memory))]);

    assert!(!logger.should_log_message(None));
    logger.log_message(None).expect("absent message is a no-op");
    assert!(memory.lock().messages().is_empty());
}

#[test]
fn test_all_loggers_failing_are_aggregated() {
    let first = FailingLogger::new(LogLevel::Trace);
    let second = FailingLogger::new(LogLevel::Trace);
    let mut logger = DistributedLogger::new(vec![
        Box::new(Arc::clone(&first)),
        Box::new(Arc::clone(&second)),
    ]);

    let error = logger
        .log(&LogMessage::new(LogLevel::Warn, "lost").expect("valid message"))
        .expect_err("both loggers fail");

    match &error {
        LoggerError::Logging { message, causes } => {
            assert_eq!(message, LOGGING_FAILURE_MESSAGE);
            assert_eq!(causes.len(), 2);
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(first.lock().attempts, 1);
    assert_eq!(second.lock().attempts, 1);
}

#[test]
fn test_single_failure_does_not_block_delivery() {
    let failing = FailingLogger::new(LogLevel::Trace);
    let memory = shared(LogLevel::Trace);
    let mut logger = DistributedLogger::new(vec![
        Box::new(Arc::clone(&failing)),
        Box::new(Arc::clone(&memory)),
    ]);

    let result = logger.log(&LogMessage::new(LogLevel::Error, "partial").expect("valid message"));

    let error = result.expect_err("aggregate failure is raised");
    assert_eq!(error.causes().len(), 1);
    assert!(matches!(error.causes()[0], LoggerError::WriterError(_)));
    assert_eq!(memory.lock().last().map(|m| m.text()), Some("partial"));
}

#[test]
fn test_nested_fan_out() {
    let inner_memory = shared(LogLevel::Warn);
    let inner = DistributedLogger::new(vec![Box::new(Arc::clone(&inner_memory))]);
    let outer_memory = shared(LogLevel::Info);
    let mut outer = DistributedLogger::new(vec![
        Box::new(inner),
        Box::new(Arc::clone(&outer_memory)),
        Box::new(NullLogger::new(LogLevel::None)),
    ]);

    assert_eq!(outer.level(), LogLevel::Info);

    outer
        .log(&LogMessage::new(LogLevel::Info, "info").expect("valid message"))
        .expect("delivered");
    outer
        .log(&LogMessage::new(LogLevel::Fatal, "fatal").expect("valid message"))
        .expect("delivered");

    assert_eq!(inner_memory.lock().messages().len(), 1);
    assert_eq!(outer_memory.lock().messages().len(), 2);

    outer.set_level(LogLevel::Error);
    assert_eq!(inner_memory.lock().level(), LogLevel::Error);
    assert_eq!(outer_memory.lock().level(), LogLevel::Error);
}

#[test]
fn test_close_on_drop() {
    let memory = shared(LogLevel::Info);
    {
        let _logger = DistributedLogger::new(vec![Box::new(Arc::clone(&memory))]);
    }
    assert_eq!(memory.lock().close_count(), 1);
}

#[test]
fn test_message_construction_defaults() {
    assert!(matches!(
        LogMessage::new(LogLevel::None, "x"),
        Err(LoggerError::Validation { .. })
    ));

    let message = LogMessage::new(LogLevel::Debug, "x").expect("valid message");
    assert!(message.format_parameters().is_empty());
    assert!(message.properties().is_empty());
    assert!(!message.has_additional_information());
    assert_eq!(message.format_provider(), &FormatProvider::invariant());
}

#[test]
fn test_facade_delivers_to_logger() {
    let memory = shared(LogLevel::Trace);
    let diagnostics = SystemDiagnostics::builder()
        .logger(Arc::clone(&memory))
        .build()
        .expect("logger supplied");

    diagnostics
        .log(LogLevel::Error, "This is a message")
        .expect("delivered");

    let memory = memory.lock();
    let stored = memory.last().expect("message captured");
    assert_eq!(stored.level(), LogLevel::Error);
    assert_eq!(stored.text(), "This is a message");
}

#[test]
fn test_facade_over_fan_out() {
    let debug = shared(LogLevel::Debug);
    let error = shared(LogLevel::Error);
    let fan_out = DistributedLogger::new(vec![
        Box::new(Arc::clone(&debug)),
        Box::new(Arc::clone(&error)),
    ]);
    let diagnostics = SystemDiagnostics::builder()
        .logger(fan_out)
        .build()
        .expect("logger supplied");

    diagnostics
        .log_format(LogLevel::Info, "{0} jobs queued", &[FieldValue::Int(3)])
        .expect("delivered");
    rust_diagnostics::error!(diagnostics, "job {0} failed", "import").expect("delivered");

    assert_eq!(debug.lock().messages().len(), 2);
    let error = error.lock();
    assert_eq!(error.messages().len(), 1);
    assert_eq!(
        error.last().map(|m| m.render().expect("renders")),
        Some("job import failed".to_string())
    );
}

#[test]
fn test_forwarding_pipe() {
    let memory = shared(LogLevel::Trace);
    let diagnostics = SystemDiagnostics::builder()
        .logger(Arc::clone(&memory))
        .build()
        .expect("logger supplied");
    let pipe: Box<dyn LogMessagesFromRemote> =
        Box::new(LogForwardingPipe::new(Arc::new(diagnostics)));

    pipe.log(LogLevel::Warn, "remote").expect("forwarded");
    pipe.log_with_provider(
        LogLevel::Info,
        &FormatProvider::new("de-DE", ','),
        "{0}",
        &[FieldValue::Float(1.5)],
    )
    .expect("forwarded");

    let memory = memory.lock();
    assert_eq!(memory.messages().len(), 2);
    assert_eq!(memory.messages()[1].render().expect("renders"), "1,5");
}

#[test]
fn test_file_logger_output() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("diagnostics.log");

    let file = FileLogger::new(&log_file, LogLevel::Info)
        .expect("Failed to create file logger")
        .with_template(DebugLogTemplate::default().with_timestamp_format(TimestampFormat::Iso8601));
    let mut logger = DistributedLogger::new(vec![Box::new(file)]);

    let message = LogMessage::builder(LogLevel::Warn)
        .text("Disk {0} at {1}%")
        .parameter("sda1")
        .parameter(91)
        .property("host", "db-01")
        .build()
        .expect("valid message");
    logger.log(&message).expect("written");
    logger
        .log(&LogMessage::new(LogLevel::Debug, "hidden").expect("valid message"))
        .expect("filtered");
    logger.close().expect("closed");

    let content = fs::read_to_string(&log_file).expect("Failed to read log file");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains("WARN - Disk sda1 at 91%"));
    assert!(lines[0].ends_with("| host=db-01"));
}

#[test]
fn test_json_logger_output() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("diagnostics.jsonl");

    let mut logger = JsonLogger::new(&log_file, LogLevel::Debug).expect("Failed to create logger");
    for i in 0..3 {
        let message = LogMessage::with_parameters(
            LogLevel::Info,
            "request {0}",
            vec![FieldValue::Int(i)],
        )
        .expect("valid message");
        logger.log(&message).expect("written");
    }
    logger.close().expect("closed");

    let content = fs::read_to_string(&log_file).expect("Failed to read log file");
    let records: Vec<serde_json::Value> = content
        .lines()
        .map(|line| serde_json::from_str(line).expect("valid JSON line"))
        .collect();
    assert_eq!(records.len(), 3);
    assert_eq!(records[2]["rendered"], "request 2");
    assert_eq!(records[0]["level"], "INFO");
}

#[test]
fn test_loggers_seeded_from_configuration() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let configuration = MapConfiguration::new()
        .with_value(&DiagnosticsConfigurationKeys::DEFAULT_LOG_LEVEL, LogLevel::Warn)
        .expect("serializable level");

    let file = FileLogger::from_configuration(temp_dir.path().join("seeded.log"), &configuration)
        .expect("Failed to create file logger");
    assert_eq!(file.level(), LogLevel::Warn);

    let from_json = MapConfiguration::from_json(r#"{"DefaultLogLevel": "DEBUG"}"#)
        .expect("valid configuration");
    let file = FileLogger::from_configuration(temp_dir.path().join("json.log"), &from_json)
        .expect("Failed to create file logger");
    assert_eq!(file.level(), LogLevel::Debug);

    let broken = MapConfiguration::from_json(r#"{"DefaultLogLevel": 17}"#)
        .expect("valid JSON object");
    let result = FileLogger::from_configuration(temp_dir.path().join("broken.log"), &broken);
    assert!(matches!(
        result,
        Err(LoggerError::InvalidConfiguration { .. })
    ));
}
