//! Logging macros for ergonomic calls on a [`SystemDiagnostics`](crate::SystemDiagnostics).
//!
//! Arguments are converted into [`FieldValue`](crate::FieldValue)s and
//! substituted into indexed placeholders (`{0}`, `{1}`, ...).
//!
//! # Examples
//!
//! ```
//! use rust_diagnostics::prelude::*;
//! use rust_diagnostics::info;
//!
//! let diagnostics = SystemDiagnostics::builder()
//!     .callback(|level, text| println!("{} {}", level, text))
//!     .build()
//!     .unwrap();
//!
//! // Basic logging
//! info!(diagnostics, "Server started").unwrap();
//!
//! // With format arguments
//! let port = 8080;
//! info!(diagnostics, "Server listening on port {0}", port).unwrap();
//! ```

/// Log a message with indexed format arguments.
///
/// # Examples
///
/// ```
/// # use rust_diagnostics::prelude::*;
/// # let diagnostics = SystemDiagnostics::builder().callback(|_, _| {}).build().unwrap();
/// use rust_diagnostics::log;
/// log!(diagnostics, LogLevel::Info, "Simple message").unwrap();
/// log!(diagnostics, LogLevel::Error, "Error code: {0}", 500).unwrap();
/// ```
#[macro_export]
macro_rules! log {
    ($diagnostics:expr, $level:expr, $format:expr $(, $arg:expr)* $(,)?) => {
        $diagnostics.log_format(
            $level,
            $format,
            &[$($crate::FieldValue::from($arg)),*],
        )
    };
}

/// Log a trace-level message.
#[macro_export]
macro_rules! trace {
    ($diagnostics:expr, $($arg:tt)+) => {
        $crate::log!($diagnostics, $crate::LogLevel::Trace, $($arg)+)
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($diagnostics:expr, $($arg:tt)+) => {
        $crate::log!($diagnostics, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
///
/// # Examples
///
/// ```
/// # use rust_diagnostics::prelude::*;
/// # let diagnostics = SystemDiagnostics::builder().callback(|_, _| {}).build().unwrap();
/// use rust_diagnostics::info;
/// info!(diagnostics, "Processing {0} items", 100).unwrap();
/// ```
#[macro_export]
macro_rules! info {
    ($diagnostics:expr, $($arg:tt)+) => {
        $crate::log!($diagnostics, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($diagnostics:expr, $($arg:tt)+) => {
        $crate::log!($diagnostics, $crate::LogLevel::Warn, $($arg)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($diagnostics:expr, $($arg:tt)+) => {
        $crate::log!($diagnostics, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Log a fatal-level message.
///
/// # Examples
///
/// ```
/// # use rust_diagnostics::prelude::*;
/// # let diagnostics = SystemDiagnostics::builder().callback(|_, _| {}).build().unwrap();
/// use rust_diagnostics::fatal;
/// fatal!(diagnostics, "Unable to recover from error: {0}", "disk full").unwrap();
/// ```
#[macro_export]
macro_rules! fatal {
    ($diagnostics:expr, $($arg:tt)+) => {
        $crate::log!($diagnostics, $crate::LogLevel::Fatal, $($arg)+)
    };
}
