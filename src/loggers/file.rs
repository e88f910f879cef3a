//! File logger implementation

use super::configured_level;
use crate::core::{
    Configuration, DebugLogTemplate, LogLevel, LogMessage, LogTemplate, Logger, LoggerError,
    Result,
};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Appends one rendered line per message to a file
pub struct FileLogger {
    level: LogLevel,
    path: PathBuf,
    writer: Option<BufWriter<File>>,
    template: Box<dyn LogTemplate>,
}

impl FileLogger {
    pub fn new(path: impl Into<PathBuf>, level: LogLevel) -> Result<Self> {
        let path = path.into();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| {
                LoggerError::io_operation(
                    "opening log file",
                    format!("cannot open '{}'", path.display()),
                    e,
                )
            })?;

        Ok(Self {
            level,
            path,
            writer: Some(BufWriter::new(file)),
            template: Box::new(DebugLogTemplate::default()),
        })
    }

    /// Create a file logger whose threshold is the configured `DefaultLogLevel`
    pub fn from_configuration(
        path: impl Into<PathBuf>,
        configuration: &dyn Configuration,
    ) -> Result<Self> {
        Self::new(path, configured_level(configuration)?)
    }

    /// Set the template used to render messages
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use rust_diagnostics::loggers::FileLogger;
    /// use rust_diagnostics::{DebugLogTemplate, LogLevel, TimestampFormat};
    ///
    /// let logger = FileLogger::new("/var/log/app.log", LogLevel::Info)
    ///     .unwrap()
    ///     .with_template(DebugLogTemplate::default().with_timestamp_format(TimestampFormat::Iso8601));
    /// ```
    #[must_use]
    pub fn with_template(mut self, template: impl LogTemplate + 'static) -> Self {
        self.template = Box::new(template);
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_closed(&self) -> bool {
        self.writer.is_none()
    }
}

impl Logger for FileLogger {
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

        let mut output = self.template.translate(message);
        output.push('\n');

        let writer = self
            .writer
            .as_mut()
            .ok_or_else(|| LoggerError::LoggerClosed("file".to_string()))?;
        writer.write_all(output.as_bytes())?;
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        if let Some(mut writer) = self.writer.take() {
            writer.flush()?;
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "file"
    }
}

impl Drop for FileLogger {
    fn drop(&mut self) {
        // Ensure all buffered data is flushed to disk
        let _ = self.close();
    }
}
