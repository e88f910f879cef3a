//! Convenience entry point that turns a level and a template into a log call

use super::metrics::MetricsCollector;
use crate::core::{
    render_template, FieldValue, FormatProvider, LogLevel, LogMessage, Logger, LoggerError,
    Result,
};
use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;

/// Raw callback receiving a level and the fully rendered text
pub type LogCallback = Box<dyn Fn(LogLevel, &str) + Send + Sync>;

/// Where [`SystemDiagnostics`] sends its output
pub enum LogTarget {
    /// Messages are built and passed to [`Logger::log`]
    Logger(Mutex<Box<dyn Logger>>),
    /// Text is rendered by the facade and passed to the callback
    Callback(LogCallback),
}

impl fmt::Debug for LogTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogTarget::Logger(_) => f.write_str("Logger"),
            LogTarget::Callback(_) => f.write_str("Callback"),
        }
    }
}

/// Provides methods that help with diagnosing issues in an application
///
/// # Example
///
/// ```
/// use rust_diagnostics::loggers::MemoryLogger;
/// use rust_diagnostics::{LogLevel, SystemDiagnostics};
///
/// let diagnostics = SystemDiagnostics::builder()
///     .logger(MemoryLogger::new(LogLevel::Trace))
///     .build()
///     .unwrap();
///
/// diagnostics.log(LogLevel::Info, "Service started").unwrap();
/// diagnostics.log_format(LogLevel::Warn, "{0} requests queued", &[42.into()]).unwrap();
/// ```
#[derive(Debug)]
pub struct SystemDiagnostics {
    target: LogTarget,
    metrics: Option<Arc<dyn MetricsCollector>>,
}

impl SystemDiagnostics {
    pub fn builder() -> SystemDiagnosticsBuilder {
        SystemDiagnosticsBuilder::new()
    }

    /// Log plain text
    pub fn log(&self, level: LogLevel, text: &str) -> Result<()> {
        self.dispatch(level, None, text, Vec::new())
    }

    /// Log a format template with its arguments, rendered with the invariant provider
    pub fn log_format(&self, level: LogLevel, format: &str, args: &[FieldValue]) -> Result<()> {
        self.dispatch(level, None, format, args.to_vec())
    }

    /// Log a format template with its arguments and a specific provider
    pub fn log_with_provider(
        &self,
        level: LogLevel,
        provider: &FormatProvider,
        format: &str,
        args: &[FieldValue],
    ) -> Result<()> {
        self.dispatch(level, Some(provider.clone()), format, args.to_vec())
    }

    /// Log `"{prefix} - {message}"`
    pub fn log_with_prefix(&self, level: LogLevel, prefix: &str, message: &str) -> Result<()> {
        let text = render_template(
            &FormatProvider::invariant(),
            "{0} - {1}",
            &[FieldValue::from(prefix), FieldValue::from(message)],
        )?;
        self.log(level, &text)
    }

    /// The metrics collector supplied at construction, unchanged
    pub fn metrics(&self) -> Option<&Arc<dyn MetricsCollector>> {
        self.metrics.as_ref()
    }

    pub fn target(&self) -> &LogTarget {
        &self.target
    }

    fn dispatch(
        &self,
        level: LogLevel,
        provider: Option<FormatProvider>,
        format: &str,
        args: Vec<FieldValue>,
    ) -> Result<()> {
        match &self.target {
            LogTarget::Logger(logger) => {
                let mut builder = LogMessage::builder(level).text(format).parameters(args);
                if let Some(provider) = provider {
                    builder = builder.provider(provider);
                }
                let message = builder.build()?;
                logger.lock().log(&message)
            }
            LogTarget::Callback(callback) => {
                let provider = provider.unwrap_or_default();
                let text = render_template(&provider, format, &args)?;
                callback(level, &text);
                Ok(())
            }
        }
    }
}

/// Builder for [`SystemDiagnostics`]
///
/// A logger or a callback is required; the metrics collector is optional.
#[derive(Default)]
pub struct SystemDiagnosticsBuilder {
    target: Option<LogTarget>,
    metrics: Option<Arc<dyn MetricsCollector>>,
}

impl SystemDiagnosticsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Send messages to `logger`
    #[must_use]
    pub fn logger<L: Logger + 'static>(mut self, logger: L) -> Self {
        self.target = Some(LogTarget::Logger(Mutex::new(Box::new(logger))));
        self
    }

    /// Send rendered text to `callback`
    #[must_use]
    pub fn callback<F>(mut self, callback: F) -> Self
    where
        F: Fn(LogLevel, &str) + Send + Sync + 'static,
    {
        self.target = Some(LogTarget::Callback(Box::new(callback)));
        self
    }

    #[must_use]
    pub fn metrics(mut self, metrics: Arc<dyn MetricsCollector>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    pub fn build(self) -> Result<SystemDiagnostics> {
        let target = self.target.ok_or_else(|| {
            LoggerError::validation("logger", "a logger or a log callback is required")
        })?;

        Ok(SystemDiagnostics {
            target,
            metrics: self.metrics,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::NullMetricsCollector;
    use crate::loggers::MemoryLogger;

    fn capture() -> (Arc<Mutex<MemoryLogger>>, SystemDiagnostics) {
        let logger = Arc::new(Mutex::new(MemoryLogger::new(LogLevel::Trace)));
        let diagnostics = SystemDiagnostics::builder()
            .logger(Arc::clone(&logger))
            .build()
            .unwrap();
        (logger, diagnostics)
    }

    fn callback_capture() -> (Arc<Mutex<Vec<(LogLevel, String)>>>, SystemDiagnostics) {
        let lines = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&lines);
        let diagnostics = SystemDiagnostics::builder()
            .callback(move |level, text| sink.lock().push((level, text.to_string())))
            .build()
            .unwrap();
        (lines, diagnostics)
    }

    #[test]
    fn test_build_without_target() {
        let result = SystemDiagnostics::builder()
            .metrics(Arc::new(NullMetricsCollector))
            .build();
        assert!(matches!(result, Err(LoggerError::Validation { .. })));
    }

    #[test]
    fn test_log_with_severity_and_message() {
        let (logger, diagnostics) = capture();
        assert!(matches!(diagnostics.target(), LogTarget::Logger(_)));

        diagnostics.log(LogLevel::Error, "This is a message").unwrap();

        let logger = logger.lock();
        let stored = logger.last().unwrap();
        assert_eq!(stored.level(), LogLevel::Error);
        assert_eq!(stored.text(), "This is a message");
    }

    #[test]
    fn test_log_with_format_parameters() {
        let (logger, diagnostics) = capture();

        diagnostics
            .log_format(LogLevel::Error, "This is a message", &[FieldValue::Int(10)])
            .unwrap();

        let logger = logger.lock();
        let stored = logger.last().unwrap();
        assert_eq!(stored.text(), "This is a message");
        assert_eq!(stored.format_parameters()[0], FieldValue::Int(10));
        assert!(stored.format_provider().is_invariant());
    }

    #[test]
    fn test_log_with_provider_and_format_parameters() {
        let (logger, diagnostics) = capture();
        let provider = FormatProvider::new("fr-FR", ',');

        diagnostics
            .log_with_provider(LogLevel::Error, &provider, "This is a message", &[10.into()])
            .unwrap();

        let logger = logger.lock();
        let stored = logger.last().unwrap();
        assert_eq!(stored.format_provider(), &provider);
        assert_eq!(stored.format_parameters()[0], FieldValue::Int(10));
    }

    #[test]
    fn test_log_none_level_is_rejected_for_loggers() {
        let (logger, diagnostics) = capture();

        let result = diagnostics.log(LogLevel::None, "never");
        assert!(matches!(result, Err(LoggerError::Validation { .. })));
        assert!(logger.lock().messages().is_empty());
    }

    #[test]
    fn test_log_with_prefix() {
        let (logger, diagnostics) = capture();

        diagnostics
            .log_with_prefix(LogLevel::Info, "Startup", "ready")
            .unwrap();

        assert_eq!(logger.lock().last().unwrap().text(), "Startup - ready");
    }

    #[test]
    fn test_callback_receives_rendered_text() {
        let (lines, diagnostics) = callback_capture();

        diagnostics.log(LogLevel::Info, "plain {0}").unwrap();
        diagnostics
            .log_format(LogLevel::Warn, "{0} of {1}", &[1.into(), 3.into()])
            .unwrap();
        diagnostics
            .log_with_provider(
                LogLevel::Debug,
                &FormatProvider::new("nl-NL", ','),
                "{0}",
                &[2.5.into()],
            )
            .unwrap();
        diagnostics
            .log_with_prefix(LogLevel::Error, "Loader", "failed")
            .unwrap();

        let lines = lines.lock();
        assert_eq!(
            *lines,
            vec![
                (LogLevel::Info, "plain {0}".to_string()),
                (LogLevel::Warn, "1 of 3".to_string()),
                (LogLevel::Debug, "2,5".to_string()),
                (LogLevel::Error, "Loader - failed".to_string()),
            ]
        );
    }

    #[test]
    fn test_callback_format_error() {
        let (lines, diagnostics) = callback_capture();

        let result = diagnostics.log_format(LogLevel::Info, "{1}", &[1.into()]);
        assert!(matches!(result, Err(LoggerError::FormatterError { .. })));
        assert!(lines.lock().is_empty());
    }

    #[test]
    fn test_metrics_are_passed_through() {
        let metrics: Arc<dyn MetricsCollector> = Arc::new(NullMetricsCollector);
        let diagnostics = SystemDiagnostics::builder()
            .callback(|_, _| {})
            .metrics(Arc::clone(&metrics))
            .build()
            .unwrap();

        assert!(Arc::ptr_eq(diagnostics.metrics().unwrap(), &metrics));

        let (_, without) = callback_capture();
        assert!(without.metrics().is_none());
    }
}
