//! Error types for the diagnostics layer

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// An argument or required dependency was invalid or missing
    #[error("Invalid argument '{argument}': {message}")]
    Validation { argument: String, message: String },

    /// One or more loggers failed while a message was dispatched
    ///
    /// Several loggers can fail for one message, so there is no single
    /// [`source`](std::error::Error::source). Walk [`LoggerError::causes`]
    /// to reach the per-logger failures.
    #[error("{message} ({} logger(s) failed)", .causes.len())]
    Logging {
        message: String,
        causes: Vec<LoggerError>,
    },

    /// IO error with context
    #[error("IO error while {operation}: {message}")]
    IoOperation {
        operation: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Logger already closed
    #[error("Logger '{0}' already closed")]
    LoggerClosed(String),

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// Writer error (generic)
    #[error("Writer error: {0}")]
    WriterError(String),

    /// Formatter error with format type
    #[error("Formatter error ({format_type}): {message}")]
    FormatterError {
        format_type: String,
        message: String,
    },
}

/// Message used for the aggregate error raised by fan-out dispatch
pub const LOGGING_FAILURE_MESSAGE: &str = "Failed to write the message to one or more loggers";

impl LoggerError {
    /// Create an invalid-argument error
    pub fn validation(argument: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::Validation {
            argument: argument.into(),
            message: message.into(),
        }
    }

    /// Create an aggregate error wrapping the per-logger failures in order
    pub fn logging_failure(causes: Vec<LoggerError>) -> Self {
        LoggerError::Logging {
            message: LOGGING_FAILURE_MESSAGE.to_string(),
            causes,
        }
    }

    /// Create an IO operation error with context
    pub fn io_operation(
        operation: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            message: message.into(),
            source,
        }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Create a formatter error
    pub fn formatter(format_type: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::FormatterError {
            format_type: format_type.into(),
            message: message.into(),
        }
    }

    /// Create a writer error (generic)
    pub fn writer<S: Into<String>>(msg: S) -> Self {
        LoggerError::WriterError(msg.into())
    }

    /// Returns true for failures a fan-out logger collects instead of
    /// propagating immediately. Invalid-argument errors are never collected.
    pub fn is_logging_failure(&self) -> bool {
        !matches!(self, LoggerError::Validation { .. })
    }

    /// The wrapped per-logger failures of an aggregate error, in dispatch order.
    /// Empty for every other kind.
    pub fn causes(&self) -> &[LoggerError] {
        match self {
            LoggerError::Logging { causes, .. } => causes,
            _ => &[],
        }
    }
}
