//! Logger trait for log output destinations

use super::{error::Result, log_level::LogLevel, log_message::LogMessage};
use parking_lot::Mutex;
use std::sync::Arc;

/// A destination for log messages
///
/// Implementors own a threshold level. A threshold of [`LogLevel::None`]
/// means the logger accepts nothing.
///
/// # Example
///
/// ```
/// use rust_diagnostics::{LogLevel, LogMessage, Logger, Result};
///
/// struct StdoutLogger {
///     level: LogLevel,
/// }
///
/// impl Logger for StdoutLogger {
///     fn level(&self) -> LogLevel {
///         self.level
///     }
///
///     fn set_level(&mut self, level: LogLevel) {
///         self.level = level;
///     }
///
///     fn log(&mut self, message: &LogMessage) -> Result<()> {
///         println!("{} {}", message.level(), message.render()?);
///         Ok(())
///     }
///
///     fn close(&mut self) -> Result<()> {
///         Ok(())
///     }
///
///     fn name(&self) -> &str {
///         "stdout"
///     }
/// }
///
/// let logger = StdoutLogger { level: LogLevel::Info };
/// assert!(logger.should_log(&LogMessage::new(LogLevel::Warn, "disk low").unwrap()));
/// ```
pub trait Logger: Send + Sync {
    /// The minimum level this logger accepts
    fn level(&self) -> LogLevel;

    fn set_level(&mut self, level: LogLevel);

    /// Indicates whether `message` passes this logger's threshold
    fn should_log(&self, message: &LogMessage) -> bool {
        self.level().accepts(message.level())
    }

    /// Write `message`. Only meaningful when [`Logger::should_log`] returned true.
    fn log(&mut self, message: &LogMessage) -> Result<()>;

    /// Flush and release resources. Must be safe to call more than once.
    fn close(&mut self) -> Result<()>;

    fn name(&self) -> &str;
}

/// Shared handle to a logger, so the owner can keep access to a logger that
/// also lives inside a [`DistributedLogger`](super::DistributedLogger).
impl<L: Logger + ?Sized> Logger for Arc<Mutex<L>> {
    fn level(&self) -> LogLevel {
        self.lock().level()
    }

    fn set_level(&mut self, level: LogLevel) {
        self.lock().set_level(level);
    }

    fn should_log(&self, message: &LogMessage) -> bool {
        self.lock().should_log(message)
    }

    fn log(&mut self, message: &LogMessage) -> Result<()> {
        self.lock().log(message)
    }

    fn close(&mut self) -> Result<()> {
        self.lock().close()
    }

    fn name(&self) -> &str {
        "shared"
    }
}

impl<L: Logger + ?Sized> Logger for Box<L> {
    fn level(&self) -> LogLevel {
        (**self).level()
    }

    fn set_level(&mut self, level: LogLevel) {
        (**self).set_level(level);
    }

    fn should_log(&self, message: &LogMessage) -> bool {
        (**self).should_log(message)
    }

    fn log(&mut self, message: &LogMessage) -> Result<()> {
        (**self).log(message)
    }

    fn close(&mut self) -> Result<()> {
        (**self).close()
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
