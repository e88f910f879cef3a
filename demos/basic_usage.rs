//! Basic diagnostics usage example
//!
//! Demonstrates the diagnostics facade over a console logger and the effect
//! of changing the threshold.
//!
//! Run with: cargo run --example basic_usage

use rust_diagnostics::loggers::ConsoleLogger;
use rust_diagnostics::prelude::*;
use rust_diagnostics::{info, warn};

fn main() -> Result<()> {
    println!("=== Rust Diagnostics - Basic Usage Example ===\n");

    // Create the facade over a console logger
    let diagnostics = SystemDiagnostics::builder()
        .logger(ConsoleLogger::new(LogLevel::Trace))
        .build()?;

    // Log messages at different levels
    println!("1. Logging at different levels:");
    diagnostics.log(LogLevel::Trace, "This is a trace message")?;
    diagnostics.log(LogLevel::Debug, "This is a debug message")?;
    diagnostics.log(LogLevel::Info, "This is an info message")?;
    diagnostics.log(LogLevel::Warn, "This is a warning message")?;
    diagnostics.log(LogLevel::Error, "This is an error message")?;
    diagnostics.log(LogLevel::Fatal, "This is a fatal message")?;

    println!("\n2. Formatted messages:");
    info!(diagnostics, "Listening on port {0}", 8080)?;
    warn!(diagnostics, "{0} of {1} workers busy", 7, 8)?;
    diagnostics.log_with_provider(
        LogLevel::Info,
        &FormatProvider::new("fr-FR", ','),
        "Load average {0}",
        &[1.25.into()],
    )?;
    diagnostics.log_with_prefix(LogLevel::Info, "Startup", "complete")?;

    println!("\n3. Logging with a raised threshold:");

    // A logger used directly filters on its own threshold
    let mut console = ConsoleLogger::new(LogLevel::Info);
    println!("   Threshold set to INFO - trace and debug won't show:");
    console.log(&LogMessage::new(LogLevel::Trace, "Trace message (hidden)")?)?;
    console.log(&LogMessage::new(LogLevel::Debug, "Debug message (hidden)")?)?;
    console.log(&LogMessage::new(LogLevel::Info, "Info message (visible)")?)?;
    console.log(&LogMessage::new(LogLevel::Warn, "Warning message (visible)")?)?;
    console.close()?;

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
