//! Core logger types and traits

pub mod config;
pub mod distributed_logger;
pub mod error;
pub mod format;
pub mod log_level;
pub mod log_message;
pub mod logger;
pub mod properties;
pub mod template;
pub mod timestamp;

pub use config::{
    Configuration, ConfigurationKey, DiagnosticsConfig, DiagnosticsConfigurationKeys,
    MapConfiguration,
};
pub use distributed_logger::DistributedLogger;
pub use error::{LoggerError, Result, LOGGING_FAILURE_MESSAGE};
pub use format::{render_template, FormatProvider};
pub use log_level::LogLevel;
pub use log_message::{LogMessage, LogMessageBuilder};
pub use logger::Logger;
pub use properties::{FieldValue, Properties};
pub use template::{Clock, DebugLogTemplate, LogTemplate};
pub use timestamp::TimestampFormat;
