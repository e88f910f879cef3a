//! Logger implementations

pub mod console;
#[cfg(feature = "file")]
pub mod file;
#[cfg(feature = "file")]
pub mod json;
pub mod memory;
pub mod null;
pub mod tracing_logger;

pub use console::ConsoleLogger;
#[cfg(feature = "file")]
pub use file::FileLogger;
#[cfg(feature = "file")]
pub use json::JsonLogger;
pub use memory::MemoryLogger;
pub use null::NullLogger;
pub use tracing_logger::TracingLogger;

// Re-export the trait for convenience
pub use crate::core::Logger;

use crate::core::{Configuration, DiagnosticsConfig, LogLevel, Result};

/// Threshold for a logger seeded from configuration (`DefaultLogLevel`)
pub fn configured_level(configuration: &dyn Configuration) -> Result<LogLevel> {
    Ok(DiagnosticsConfig::from_configuration(configuration)?.default_log_level)
}
