//! File logging example
//!
//! Demonstrates logging to console, text file and JSON file simultaneously,
//! with thresholds seeded from configuration.
//!
//! Run with: cargo run --example file_logging

use rust_diagnostics::loggers::{ConsoleLogger, FileLogger, JsonLogger};
use rust_diagnostics::prelude::*;
use rust_diagnostics::TimestampFormat;

fn main() -> Result<()> {
    println!("=== Rust Diagnostics - File Logging Example ===\n");

    let configuration = MapConfiguration::from_json(r#"{"DefaultLogLevel": "DEBUG"}"#)?;

    let file = FileLogger::from_configuration("application.log", &configuration)?
        .with_template(DebugLogTemplate::default().with_timestamp_format(TimestampFormat::Rfc3339));
    let logger = DistributedLogger::new(vec![
        Box::new(ConsoleLogger::from_configuration(&configuration)?),
        Box::new(file),
        Box::new(JsonLogger::new("application.jsonl", LogLevel::Warn)?),
    ]);

    let diagnostics = SystemDiagnostics::builder().logger(logger).build()?;

    println!("1. Logging to console and files:");
    diagnostics.log(LogLevel::Info, "Application started")?;
    diagnostics.log(LogLevel::Debug, "Loading configuration...")?;
    diagnostics.log(LogLevel::Trace, "Below every threshold")?;
    diagnostics.log_format(LogLevel::Warn, "Using defaults for {0} options", &[3.into()])?;
    diagnostics.log_with_prefix(LogLevel::Error, "Plugins", "failed to load optional plugin")?;
    diagnostics.log(LogLevel::Info, "Application initialization complete")?;

    // Dropping the facade closes every logger and flushes the files
    drop(diagnostics);

    println!("\n2. Log files written:");
    println!("   - application.log (text, DEBUG and above)");
    println!("   - application.jsonl (JSON lines, WARN and above)");

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
