//! Fan-out logging example
//!
//! Demonstrates a distributed logger forwarding to loggers with different
//! thresholds, including a `tracing` bridge and failure aggregation.
//!
//! Run with: cargo run --example fan_out

use parking_lot::Mutex;
use rust_diagnostics::loggers::{ConsoleLogger, MemoryLogger, TracingLogger};
use rust_diagnostics::prelude::*;
use std::sync::Arc;

/// A logger whose backend is always unavailable
struct UnavailableLogger;

impl Logger for UnavailableLogger {
    fn level(&self) -> LogLevel {
        LogLevel::Error
    }

    fn set_level(&mut self, _level: LogLevel) {}

    fn log(&mut self, _message: &LogMessage) -> Result<()> {
        Err(LoggerError::writer("backend unavailable"))
    }

    fn close(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "unavailable"
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new("trace"))
        .init();

    println!("=== Rust Diagnostics - Fan-out Example ===\n");

    let audit = Arc::new(Mutex::new(MemoryLogger::new(LogLevel::Warn)));
    let mut logger = DistributedLogger::new(vec![
        Box::new(ConsoleLogger::new(LogLevel::Info)),
        Box::new(TracingLogger::new(LogLevel::Debug)),
        Box::new(Arc::clone(&audit)),
    ]);

    println!("1. Aggregate threshold: {}", logger.level());

    println!("\n2. Dispatching messages:");
    for (level, text) in [
        (LogLevel::Trace, "Nobody accepts this"),
        (LogLevel::Debug, "Only the tracing bridge sees this"),
        (LogLevel::Info, "Console and tracing see this"),
        (LogLevel::Error, "Everyone sees this"),
    ] {
        let message = LogMessage::new(level, text)?;
        println!("   {} accepted: {}", level, logger.should_log(&message));
        logger.log(&message)?;
    }
    println!("   Audit logger kept {} message(s)", audit.lock().messages().len());

    println!("\n3. Raising every threshold to WARN:");
    logger.set_level(LogLevel::Warn);
    logger.log(&LogMessage::new(LogLevel::Info, "Hidden everywhere")?)?;
    logger.log(&LogMessage::new(LogLevel::Warn, "Visible everywhere")?)?;

    println!("\n4. Partial failure:");
    let mut fragile = DistributedLogger::new(vec![
        Box::new(UnavailableLogger),
        Box::new(Arc::clone(&audit)),
    ]);
    match fragile.log(&LogMessage::new(LogLevel::Fatal, "Disk full")?) {
        Ok(()) => println!("   Delivered everywhere"),
        Err(e) => {
            println!("   {}", e);
            for cause in e.causes() {
                println!("   - {}", cause);
            }
        }
    }
    println!(
        "   Audit logger still received: {:?}",
        audit.lock().last().map(|m| m.text().to_string())
    );

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
