//! Per-registration metrics for observability

use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics for a single registration
#[derive(Debug, Default)]
pub struct SinkMetrics {
    /// Total successful accepts
    accept_count: AtomicU64,
    /// Total accept failures
    failure_count: AtomicU64,
}

impl SinkMetrics {
    /// Create new metrics instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Get total accept count
    pub fn accept_count(&self) -> u64 {
        self.accept_count.load(Ordering::Relaxed)
    }

    /// Increment accept count
    pub fn inc_accept_count(&self) {
        self.accept_count.fetch_add(1, Ordering::Relaxed);
    }

    /// Get failure count
    pub fn failure_count(&self) -> u64 {
        self.failure_count.load(Ordering::Relaxed)
    }

    /// Increment failure count
    pub fn inc_failure_count(&self) {
        self.failure_count.fetch_add(1, Ordering::Relaxed);
    }

    /// Get snapshot of all metrics
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            accept_count: self.accept_count(),
            failure_count: self.failure_count(),
        }
    }
}

/// Snapshot of registration metrics (for reporting)
#[derive(Debug, Clone, Copy)]
pub struct MetricsSnapshot {
    pub accept_count: u64,
    pub failure_count: u64,
}
