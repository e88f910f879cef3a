//! Logger that forwards messages to `tracing`

use crate::core::{LogLevel, LogMessage, Logger, Result};

/// Emits each accepted message as a `tracing` event
///
/// `Fatal` has no `tracing` counterpart and is emitted at error level with
/// `fatal = true`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger {
    level: LogLevel,
}

impl TracingLogger {
    pub fn new(level: LogLevel) -> Self {
        Self { level }
    }
}

impl Logger for TracingLogger {
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

        let text = message.render()?;
        let properties = message.properties().format_fields();

        match message.level() {
            LogLevel::None => {}
            LogLevel::Trace => tracing::trace!(%properties, "{}", text),
            LogLevel::Debug => tracing::debug!(%properties, "{}", text),
            LogLevel::Info => tracing::info!(%properties, "{}", text),
            LogLevel::Warn => tracing::warn!(%properties, "{}", text),
            LogLevel::Error => tracing::error!(%properties, "{}", text),
            LogLevel::Fatal => tracing::error!(fatal = true, %properties, "{}", text),
        }
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "tracing"
    }
}
