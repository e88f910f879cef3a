//! # Rust Diagnostics
//!
//! Leveled logging with fan-out to any number of loggers, a convenience
//! facade for formatted log calls, and a pass-through for log calls that
//! arrive from another process boundary.
//!
//! ## Features
//!
//! - **Fan-out**: [`DistributedLogger`] forwards each message to every member that accepts it
//! - **Failure aggregation**: one failing logger never stops delivery to the others
//! - **Facade**: [`SystemDiagnostics`] turns a level and a template into a log call
//! - **Multiple Loggers**: Console, file, JSON, in-memory and `tracing` loggers
//!
//! ## Example
//!
//! ```
//! use rust_diagnostics::loggers::MemoryLogger;
//! use rust_diagnostics::prelude::*;
//! use std::sync::Arc;
//! use parking_lot::Mutex;
//!
//! let memory = Arc::new(Mutex::new(MemoryLogger::new(LogLevel::Debug)));
//! let mut fan_out = DistributedLogger::new(vec![
//!     Box::new(Arc::clone(&memory)) as Box<dyn Logger>,
//!     Box::new(MemoryLogger::new(LogLevel::Error)),
//! ]);
//!
//! assert_eq!(fan_out.level(), LogLevel::Debug);
//!
//! fan_out.log(&LogMessage::new(LogLevel::Info, "Service started")?)?;
//! assert_eq!(memory.lock().messages().len(), 1);
//! # Ok::<(), rust_diagnostics::LoggerError>(())
//! ```

pub mod core;
pub mod diagnostics;
pub mod loggers;
pub mod macros;

#[cfg(test)]
mod test_support;

pub mod prelude {
    pub use crate::core::{
        Configuration, DebugLogTemplate, DiagnosticsConfig, DistributedLogger, FieldValue,
        FormatProvider, LogLevel, LogMessage, LogTemplate, Logger, LoggerError, MapConfiguration,
        Properties, Result, TimestampFormat,
    };
    pub use crate::diagnostics::{
        LogForwardingPipe, LogMessagesFromRemote, MetricsCollector, NullMetricsCollector,
        SystemDiagnostics,
    };
}

pub use crate::core::{
    render_template, Clock, Configuration, ConfigurationKey, DebugLogTemplate, DiagnosticsConfig,
    DiagnosticsConfigurationKeys, DistributedLogger, FieldValue, FormatProvider, LogLevel,
    LogMessage, LogMessageBuilder, LogTemplate, Logger, LoggerError, MapConfiguration, Properties,
    Result, TimestampFormat, LOGGING_FAILURE_MESSAGE,
};
pub use diagnostics::{
    LogCallback, LogForwardingPipe, LogMessagesFromRemote, LogTarget, MetricsCollector,
    NullMetricsCollector, SystemDiagnostics, SystemDiagnosticsBuilder,
};
