//! In-memory logger, mostly useful for tests and samples

use crate::core::{LogLevel, LogMessage, Logger, Result};

/// Keeps every accepted message in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryLogger {
    level: LogLevel,
    messages: Vec<LogMessage>,
    close_count: usize,
}

impl MemoryLogger {
    pub fn new(level: LogLevel) -> Self {
        Self {
            level,
            messages: Vec::new(),
            close_count: 0,
        }
    }

    /// Messages received so far, oldest first
    pub fn messages(&self) -> &[LogMessage] {
        &self.messages
    }

    pub fn last(&self) -> Option<&LogMessage> {
        self.messages.last()
    }

    /// Number of times `close` was called
    pub fn close_count(&self) -> usize {
        self.close_count
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }
}

impl Logger for MemoryLogger {
    fn level(&self) -> LogLevel {
        self.level
    }

    fn set_level(&mut self, level: LogLevel) {
        self.level = level;
    }

    fn log(&mut self, message: &LogMessage) -> Result<()> {
        if self.should_log(message) {
            self.messages.push(message.clone());
        }
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        self.close_count += 1;
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}
