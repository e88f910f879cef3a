//! Console logger implementation

use super::configured_level;
use crate::core::{
    Configuration, DebugLogTemplate, LogLevel, LogMessage, LogTemplate, Logger, Result,
};
#[cfg(feature = "console")]
use colored::Colorize;

pub struct ConsoleLogger {
    level: LogLevel,
    #[cfg_attr(not(feature = "console"), allow(dead_code))]
    use_colors: bool,
    template: Box<dyn LogTemplate>,
}

impl ConsoleLogger {
    pub fn new(level: LogLevel) -> Self {
        Self {
            level,
            use_colors: cfg!(feature = "console"),
            template: Box::new(DebugLogTemplate::default()),
        }
    }

    /// Create a console logger whose threshold is the configured `DefaultLogLevel`
    pub fn from_configuration(configuration: &dyn Configuration) -> Result<Self> {
        Ok(Self::new(configured_level(configuration)?))
    }

    /// Enable or disable colored output. Has no effect without the `console` feature.
    #[must_use]
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    /// Set the template used to render messages
    ///
    /// # Example
    ///
    /// ```
    /// use rust_diagnostics::loggers::ConsoleLogger;
    /// use rust_diagnostics::{DebugLogTemplate, LogLevel, TimestampFormat};
    ///
    /// let logger = ConsoleLogger::new(LogLevel::Info).with_template(
    ///     DebugLogTemplate::default().with_timestamp_format(TimestampFormat::Rfc3339),
    /// );
    /// ```
    #[must_use]
    pub fn with_template(mut self, template: impl LogTemplate + 'static) -> Self {
        self.template = Box::new(template);
        self
    }

    fn format_line(&self, message: &LogMessage) -> String {
        let line = self.template.translate(message);

        #[cfg(feature = "console")]
        if self.use_colors {
            return line.color(message.level().color_code()).to_string();
        }

        line
    }
}

impl Default for ConsoleLogger {
    fn default() -> Self {
        Self::new(LogLevel::default())
    }
}

impl Logger for ConsoleLogger {
    fn level(&self) -> LogLevel {
        self.level
    }

    fn set_level(&mut self, level: LogLevel) {
        self.level = level;
    }

    fn log(&mut self, message: &LogMessage) -> Result<()> {
        if !self.should_log(message) {
            return Ok(());
        }

        let output = self.format_line(message);

        // Route Error and Fatal levels to stderr, others to stdout
        match message.level() {
            LogLevel::Error | LogLevel::Fatal => eprintln!("{}", output),
            _ => println!("{}", output),
        }
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        use std::io::Write;
        // Flush both stdout and stderr since we write to both
        std::io::stdout().flush()?;
        std::io::stderr().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}
