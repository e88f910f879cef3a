//! Logger that discards everything it accepts

use crate::core::{LogLevel, LogMessage, Logger, Result};

#[derive(Debug, Clone, Copy, Default)]
pub struct NullLogger {
    level: LogLevel,
}

impl NullLogger {
    pub fn new(level: LogLevel) -> Self {
        Self { level }
    }
}

impl Logger for NullLogger {
    fn level(&self) -> LogLevel {
        self.level
    }

    fn set_level(&mut self, level: LogLevel) {
        self.level = level;
    }

    fn log(&mut self, _message: &LogMessage) -> Result<()> {
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "null"
    }
}
