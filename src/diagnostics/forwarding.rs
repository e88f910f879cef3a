//! Pass-through adapter for log calls arriving from another process boundary

use super::system_diagnostics::SystemDiagnostics;
use crate::core::{FieldValue, FormatProvider, LogLevel, Result};
use std::sync::Arc;

/// Log calls that can be made from outside the current process boundary
pub trait LogMessagesFromRemote: Send + Sync {
    fn log(&self, severity: LogLevel, message: &str) -> Result<()>;

    /// Templates are rendered with the invariant provider
    fn log_format(&self, severity: LogLevel, format: &str, parameters: &[FieldValue]) -> Result<()>;

    fn log_with_provider(
        &self,
        severity: LogLevel,
        provider: &FormatProvider,
        format: &str,
        parameters: &[FieldValue],
    ) -> Result<()>;
}

/// Forwards remote log calls to a [`SystemDiagnostics`]
#[derive(Debug, Clone)]
pub struct LogForwardingPipe {
    diagnostics: Arc<SystemDiagnostics>,
}

impl LogForwardingPipe {
    pub fn new(diagnostics: Arc<SystemDiagnostics>) -> Self {
        Self { diagnostics }
    }
}

impl LogMessagesFromRemote for LogForwardingPipe {
    fn log(&self, severity: LogLevel, message: &str) -> Result<()> {
        self.diagnostics.log(severity, message)
    }

    fn log_format(&self, severity: LogLevel, format: &str, parameters: &[FieldValue]) -> Result<()> {
        self.diagnostics.log_format(severity, format, parameters)
    }

    fn log_with_provider(
        &self,
        severity: LogLevel,
        provider: &FormatProvider,
        format: &str,
        parameters: &[FieldValue],
    ) -> Result<()> {
        self.diagnostics
            .log_with_provider(severity, provider, format, parameters)
    }
}
