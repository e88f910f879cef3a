//! Fan-out logger that presents several loggers as one

use super::{
    error::{LoggerError, Result},
    log_level::LogLevel,
    log_message::LogMessage,
    logger::Logger,
};

/// Sends each message to every member logger whose threshold accepts it
///
/// The member list is fixed at construction and dispatch is sequential, in
/// member order. Callers sharing a `DistributedLogger` across threads must
/// serialize access themselves (for example `Arc<Mutex<DistributedLogger>>`).
///
/// # Example
///
/// ```
/// use rust_diagnostics::loggers::MemoryLogger;
/// use rust_diagnostics::{DistributedLogger, LogLevel, LogMessage, Logger};
///
/// let mut logger = DistributedLogger::new(vec![
///     Box::new(MemoryLogger::new(LogLevel::Debug)),
///     Box::new(MemoryLogger::new(LogLevel::Warn)),
/// ]);
///
/// // The least restrictive member threshold wins
/// assert_eq!(logger.level(), LogLevel::Debug);
///
/// logger.log(&LogMessage::new(LogLevel::Info, "only the first member sees this").unwrap())
///     .unwrap();
/// ```
pub struct DistributedLogger {
    loggers: Vec<Box<dyn Logger>>,
}

impl DistributedLogger {
    #[must_use]
    pub fn new(loggers: Vec<Box<dyn Logger>>) -> Self {
        Self { loggers }
    }

    /// The member loggers, in dispatch order
    pub fn loggers(&self) -> &[Box<dyn Logger>] {
        &self.loggers
    }

    pub fn len(&self) -> usize {
        self.loggers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loggers.is_empty()
    }

    /// Returns true if at least one member will accept `message`.
    ///
    /// An absent message is never loggable.
    pub fn should_log_message(&self, message: Option<&LogMessage>) -> bool {
        let message = match message {
            Some(m) if LogMessage::is_loggable(Some(m)) => m,
            _ => return false,
        };

        // Compared against thresholds directly; the members do not re-validate
        self.loggers
            .iter()
            .any(|logger| logger.level().accepts(message.level()))
    }

    /// Dispatch `message` to every member that accepts it.
    ///
    /// An absent message is ignored. Logging failures from members are
    /// collected and returned together, after every member was tried, as
    /// [`LoggerError::Logging`]. Any other error aborts dispatch at once.
    pub fn log_message(&mut self, message: Option<&LogMessage>) -> Result<()> {
        let message = match message {
            Some(m) if LogMessage::is_loggable(Some(m)) => m,
            _ => return Ok(()),
        };

        let mut failures = Vec::new();
        for (idx, logger) in self.loggers.iter_mut().enumerate() {
            if !logger.should_log(message) {
                continue;
            }

            match logger.log(message) {
                Ok(()) => {}
                Err(e) if e.is_logging_failure() => {
                    tracing::warn!(
                        logger = logger.name(),
                        index = idx,
                        error = %e,
                        "logger failed to write message"
                    );
                    failures.push(e);
                }
                Err(e) => return Err(e),
            }
        }

        if failures.is_empty() {
            Ok(())
        } else {
            Err(LoggerError::logging_failure(failures))
        }
    }
}

impl Logger for DistributedLogger {
    /// The least restrictive member threshold, or `None` without members.
    /// Members set to `None` never lower the result.
    fn level(&self) -> LogLevel {
        self.loggers
            .iter()
            .map(|logger| logger.level())
            .min_by_key(LogLevel::restrictiveness)
            .unwrap_or(LogLevel::None)
    }

    /// Applies `level` to every member, in order
    fn set_level(&mut self, level: LogLevel) {
        tracing::debug!(%level, members = self.loggers.len(), "propagating log level");
        for logger in self.loggers.iter_mut() {
            logger.set_level(level);
        }
    }

    fn should_log(&self, message: &LogMessage) -> bool {
        self.should_log_message(Some(message))
    }

    fn log(&mut self, message: &LogMessage) -> Result<()> {
        self.log_message(Some(message))
    }

    fn close(&mut self) -> Result<()> {
        for logger in self.loggers.iter_mut() {
            logger.close()?;
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "distributed"
    }
}

impl Drop for DistributedLogger {
    fn drop(&mut self) {
        let _ = self.close();
    }
}
