//! JSON logger for structured logging

use crate::core::{LogLevel, LogMessage, Logger, LoggerError, Result};
use serde::Serialize;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

/// JSON file logger for structured logging
///
/// Writes each message as a single-line JSON object (JSONL format):
/// the serialized message plus its `rendered` text and a millisecond `timestamp`.
pub struct JsonLogger {
    level: LogLevel,
    writer: Option<BufWriter<File>>,
}

#[derive(Serialize)]
struct JsonRecord<'a> {
    timestamp: i64,
    #[serde(flatten)]
    message: &'a LogMessage,
    rendered: String,
}

impl JsonLogger {
    /// Create a new JSON logger appending to `path`
    pub fn new<P: AsRef<Path>>(path: P, level: LogLevel) -> Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| {
                LoggerError::io_operation(
                    "opening JSON log file",
                    format!("cannot open '{}'", path.display()),
                    e,
                )
            })?;

        Ok(Self {
            level,
            writer: Some(BufWriter::new(file)),
        })
    }
}

impl Logger for JsonLogger {
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

        let record = JsonRecord {
            timestamp: chrono::Utc::now().timestamp_millis(),
            message,
            rendered: message.render()?,
        };

        let json = serde_json::to_string(&record)?;

        let writer = self
            .writer
            .as_mut()
            .ok_or_else(|| LoggerError::LoggerClosed("json".to_string()))?;
        writeln!(writer, "{}", json)?;
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        if let Some(mut writer) = self.writer.take() {
            writer.flush()?;
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "json"
    }
}

impl Drop for JsonLogger {
    fn drop(&mut self) {
        let _ = self.close();
    }
}
