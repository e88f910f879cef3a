//! Metrics collector handle
//!
//! The diagnostics layer only passes a collector through; it never calls into it.

use std::fmt::Debug;

/// Marker for objects that collect metrics
pub trait MetricsCollector: Send + Sync + Debug {}

/// Collector that records nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct NullMetricsCollector;

impl MetricsCollector for NullMetricsCollector {}
