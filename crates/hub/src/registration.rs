//! Registration - binds one sink to its category labels

use std::fmt;
use std::sync::Arc;

use contracts::LogSink;

use crate::metrics::SinkMetrics;

/// One entry in the hub's dispatch list.
///
/// Immutable after creation. Categories are kept exactly as supplied: no
/// dedup, no trimming, empty strings allowed. Cloning shares the underlying
/// sink and metrics; the category vector is copied.
#[derive(Clone)]
pub struct Registration {
    sink: Arc<dyn LogSink>,
    categories: Vec<String>,
    metrics: Arc<SinkMetrics>,
}

impl Registration {
    pub(crate) fn new(sink: Arc<dyn LogSink>, categories: Vec<String>) -> Self {
        Self {
            sink,
            categories,
            metrics: Arc::new(SinkMetrics::new()),
        }
    }

    /// The registered sink
    pub fn sink(&self) -> &Arc<dyn LogSink> {
        &self.sink
    }

    /// Sink name (used for logging/metrics)
    pub fn sink_name(&self) -> &str {
        self.sink.name()
    }

    /// Category labels exactly as supplied at registration time
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Metrics for this registration
    pub fn metrics(&self) -> &Arc<SinkMetrics> {
        &self.metrics
    }

    /// Whether this registration matches the given category filter.
    ///
    /// `None` (no filter) matches every registration regardless of its own
    /// categories. A non-empty filter matches iff the category vector
    /// contains an exactly equal string; an empty vector never matches.
    pub fn matches(&self, filter: Option<&str>) -> bool {
        match filter {
            None => true,
            Some(category) => self.categories.iter().any(|c| c == category),
        }
    }
}

impl fmt::Debug for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration")
            .field("sink", &self.sink_name())
            .field("categories", &self.categories)
            .finish()
    }
}
