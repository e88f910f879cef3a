//! Log message structure
//!
//! A `LogMessage` is validated once, at construction, and is read-only
//! afterwards. Every constructor funnels into [`LogMessageBuilder::build`].

use super::error::{LoggerError, Result};
use super::format::{render_template, FormatProvider};
use super::log_level::LogLevel;
use super::properties::{FieldValue, Properties};
use serde::{Deserialize, Serialize};

/// A message that should be logged by a [`Logger`](super::Logger)
///
/// # Example
///
/// ```
/// use rust_diagnostics::{LogLevel, LogMessage};
///
/// let message = LogMessage::with_parameters(LogLevel::Info, "Loaded {0} plugins", vec![3.into()])
///     .unwrap();
/// assert_eq!(message.render().unwrap(), "Loaded 3 plugins");
/// assert!(!message.has_additional_information());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "LogMessageRecord")]
pub struct LogMessage {
    level: LogLevel,
    text: String,
    format_parameters: Vec<FieldValue>,
    format_provider: FormatProvider,
    properties: Properties,
}

impl LogMessage {
    /// Create a message with plain text
    pub fn new(level: LogLevel, text: impl Into<String>) -> Result<Self> {
        Self::builder(level).text(text).build()
    }

    /// Create a message from a format template and its parameters
    pub fn with_parameters(
        level: LogLevel,
        format: impl Into<String>,
        parameters: Vec<FieldValue>,
    ) -> Result<Self> {
        Self::builder(level).text(format).parameters(parameters).build()
    }

    /// Create a message from a format template, a culture and parameters
    pub fn with_provider(
        level: LogLevel,
        provider: FormatProvider,
        format: impl Into<String>,
        parameters: Vec<FieldValue>,
    ) -> Result<Self> {
        Self::builder(level)
            .provider(provider)
            .text(format)
            .parameters(parameters)
            .build()
    }

    /// Create a message carrying additional structured properties
    pub fn with_properties(
        level: LogLevel,
        properties: Properties,
        text: impl Into<String>,
    ) -> Result<Self> {
        Self::builder(level).properties(properties).text(text).build()
    }

    pub fn builder(level: LogLevel) -> LogMessageBuilder {
        LogMessageBuilder::new(level)
    }

    #[inline]
    pub fn level(&self) -> LogLevel {
        self.level
    }

    /// The message text, which is a format template when parameters are present
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn format_parameters(&self) -> &[FieldValue] {
        &self.format_parameters
    }

    pub fn format_provider(&self) -> &FormatProvider {
        &self.format_provider
    }

    pub fn properties(&self) -> &Properties {
        &self.properties
    }

    /// True when the message carries properties that a logger should process
    pub fn has_additional_information(&self) -> bool {
        !self.properties.is_empty()
    }

    /// Apply the format parameters to the text using the message's provider
    pub fn render(&self) -> Result<String> {
        render_template(&self.format_provider, &self.text, &self.format_parameters)
    }

    /// Serialize to JSON string
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse from JSON string. The payload is validated like any other construction.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Returns true when `message` is present and has a real severity.
    pub fn is_loggable(message: Option<&LogMessage>) -> bool {
        matches!(message, Some(m) if !m.level.is_none())
    }
}

/// Builder for [`LogMessage`]
///
/// `build` rejects a `None` level and a missing text.
#[derive(Debug, Clone)]
pub struct LogMessageBuilder {
    level: LogLevel,
    text: Option<String>,
    format_parameters: Vec<FieldValue>,
    format_provider: Option<FormatProvider>,
    properties: Properties,
}

impl LogMessageBuilder {
    pub fn new(level: LogLevel) -> Self {
        Self {
            level,
            text: None,
            format_parameters: Vec::new(),
            format_provider: None,
            properties: Properties::new(),
        }
    }

    /// Set the message text or format template
    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Append one format parameter
    #[must_use]
    pub fn parameter(mut self, value: impl Into<FieldValue>) -> Self {
        self.format_parameters.push(value.into());
        self
    }

    /// Replace the format parameters
    #[must_use]
    pub fn parameters(mut self, parameters: Vec<FieldValue>) -> Self {
        self.format_parameters = parameters;
        self
    }

    #[must_use]
    pub fn provider(mut self, provider: FormatProvider) -> Self {
        self.format_provider = Some(provider);
        self
    }

    /// Add a structured property
    #[must_use]
    pub fn property<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.properties = self.properties.with_field(key, value);
        self
    }

    /// Replace the structured properties
    #[must_use]
    pub fn properties(mut self, properties: Properties) -> Self {
        self.properties = properties;
        self
    }

    pub fn build(self) -> Result<LogMessage> {
        if self.level.is_none() {
            return Err(LoggerError::validation(
                "level",
                "cannot log a message with the level set to NONE",
            ));
        }

        let text = self
            .text
            .ok_or_else(|| LoggerError::validation("text", "a message requires a text"))?;

        Ok(LogMessage {
            level: self.level,
            text,
            format_parameters: self.format_parameters,
            format_provider: self.format_provider.unwrap_or_default(),
            properties: self.properties,
        })
    }
}

/// Wire shape of a message before validation
#[derive(Deserialize)]
struct LogMessageRecord {
    level: LogLevel,
    text: Option<String>,
    #[serde(default)]
    format_parameters: Vec<FieldValue>,
    #[serde(default)]
    format_provider: Option<FormatProvider>,
    #[serde(default)]
    properties: Properties,
}

impl TryFrom<LogMessageRecord> for LogMessage {
    type Error = LoggerError;

    fn try_from(record: LogMessageRecord) -> Result<Self> {
        let mut builder = LogMessageBuilder::new(record.level)
            .parameters(record.format_parameters)
            .properties(record.properties);
        if let Some(text) = record.text {
            builder = builder.text(text);
        }
        if let Some(provider) = record.format_provider {
            builder = builder.provider(provider);
        }
        builder.build()
    }
}
