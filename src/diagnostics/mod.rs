//! Diagnostics facade and its collaborators

pub mod forwarding;
pub mod metrics;
pub mod system_diagnostics;

pub use forwarding::{LogForwardingPipe, LogMessagesFromRemote};
pub use metrics::{MetricsCollector, NullMetricsCollector};
pub use system_diagnostics::{LogCallback, LogTarget, SystemDiagnostics, SystemDiagnosticsBuilder};
