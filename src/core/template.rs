//! Log templates turn a message into the line a logger writes

use super::config::{Configuration, DiagnosticsConfigurationKeys, MapConfiguration};
use super::log_level::LogLevel;
use super::log_message::LogMessage;
use super::timestamp::TimestampFormat;
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// Translates messages into text
pub trait LogTemplate: Send + Sync {
    fn name(&self) -> &str;

    /// Threshold a logger using this template should start with
    fn default_log_level(&self) -> LogLevel;

    fn translate(&self, message: &LogMessage) -> String;
}

/// Source of the current time for templates
pub type Clock = fn() -> DateTime<Utc>;

/// Template producing `"{timestamp} {LEVEL} - {text}"`, followed by
/// `" | key=value ..."` when the message carries properties
#[derive(Clone)]
pub struct DebugLogTemplate {
    configuration: Arc<dyn Configuration>,
    clock: Clock,
    timestamp_format: TimestampFormat,
}

impl DebugLogTemplate {
    pub const NAME: &'static str = "debug";

    pub fn new(configuration: Arc<dyn Configuration>, clock: Clock) -> Self {
        Self {
            configuration,
            clock,
            timestamp_format: TimestampFormat::default(),
        }
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }
}

impl Default for DebugLogTemplate {
    fn default() -> Self {
        Self::new(Arc::new(MapConfiguration::new()), Utc::now)
    }
}

impl LogTemplate for DebugLogTemplate {
    fn name(&self) -> &str {
        Self::NAME
    }

    /// The configured `DefaultLogLevel`, or `Trace` when it is unset or unreadable
    fn default_log_level(&self) -> LogLevel {
        DiagnosticsConfigurationKeys::DEFAULT_LOG_LEVEL
            .read(self.configuration.as_ref())
            .ok()
            .flatten()
            .unwrap_or(LogLevel::Trace)
    }

    fn translate(&self, message: &LogMessage) -> String {
        // A template that fails to render is written verbatim
        let text = message
            .render()
            .unwrap_or_else(|_| message.text().to_string());

        let mut line = format!(
            "{} {} - {}",
            self.timestamp_format.format(&(self.clock)()),
            message.level(),
            text
        );

        if message.has_additional_information() {
            line.push_str(" | ");
            line.push_str(&message.properties().format_fields());
        }

        line
    }
}

impl PartialEq for DebugLogTemplate {
    fn eq(&self, other: &Self) -> bool {
        self.name() == other.name()
    }
}

impl std::fmt::Debug for DebugLogTemplate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DebugLogTemplate")
            .field("timestamp_format", &self.timestamp_format)
            .finish()
    }
}
