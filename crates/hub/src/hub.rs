//! LogHub - registration list and sequential fan-out

use std::sync::Arc;

use tracing::{debug, instrument, warn};

use contracts::{LogRequest, LogSink};

use crate::error::HubError;
use crate::metrics::MetricsSnapshot;
use crate::registration::Registration;

/// The fan-out hub.
///
/// Holds an ordered, append-only list of registrations. Insertion order is
/// preserved and is the dispatch order. The hub applies no internal locking:
/// `add_sink` takes `&mut self`, so concurrent callers must serialize access
/// themselves (typically behind their own `Mutex` or by confining the hub to
/// one task).
#[derive(Default)]
pub struct LogHub {
    registrations: Vec<Registration>,
}

impl LogHub {
    /// Create an empty hub
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a sink under the given category labels.
    ///
    /// Appends a new registration; never deduplicates. Registering the same
    /// sink twice creates two independent registrations, each dispatched on
    /// matching log calls. Categories are stored exactly as supplied (empty
    /// vector, empty strings, and duplicates are all legal). Infallible.
    pub fn add_sink(&mut self, sink: Arc<dyn LogSink>, categories: Vec<String>) {
        debug!(
            sink = sink.name(),
            categories = ?categories,
            "Sink registered"
        );
        self.registrations.push(Registration::new(sink, categories));
    }

    /// Dispatch one log call.
    ///
    /// Selects matching registrations (all of them when the category is
    /// absent or blank), then invokes each sink's `accept` in registration
    /// order, awaiting every call before starting the next. Returns after
    /// all matching sinks have completed.
    ///
    /// # Errors
    /// The first failing sink aborts dispatch: the error is returned with
    /// the sink's name attached and remaining matching sinks are not
    /// invoked.
    #[instrument(
        name = "hub_log",
        skip(self, request),
        fields(category = request.category_filter().unwrap_or(""))
    )]
    pub async fn log(&self, request: LogRequest) -> Result<(), HubError> {
        let matched: Vec<&Registration> = self
            .registrations
            .iter()
            .filter(|reg| reg.matches(request.category_filter()))
            .collect();

        debug!(
            matched = matched.len(),
            total = self.registrations.len(),
            "Dispatching record"
        );

        let record = request.into_record();

        for reg in matched {
            match reg.sink().accept(&record).await {
                Ok(()) => {
                    reg.metrics().inc_accept_count();
                }
                Err(e) => {
                    reg.metrics().inc_failure_count();
                    warn!(
                        sink = reg.sink_name(),
                        error = %e,
                        "Sink accept failed, aborting dispatch"
                    );
                    return Err(HubError::sink_accept(reg.sink_name(), e));
                }
            }
        }

        Ok(())
    }

    /// Registered sinks, one entry per registration, in registration order.
    ///
    /// A sink registered twice appears twice. The returned vector is a
    /// snapshot; mutating it does not affect the hub.
    pub fn sinks(&self) -> Vec<Arc<dyn LogSink>> {
        self.registrations
            .iter()
            .map(|reg| Arc::clone(reg.sink()))
            .collect()
    }

    /// Registrations (sink + categories) in registration order, as a snapshot
    pub fn registrations(&self) -> Vec<Registration> {
        self.registrations.clone()
    }

    /// Get metrics for all registrations
    pub fn metrics(&self) -> Vec<(String, MetricsSnapshot)> {
        self.registrations
            .iter()
            .map(|reg| (reg.sink_name().to_string(), reg.metrics().snapshot()))
            .collect()
    }
}
