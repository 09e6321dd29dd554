//! # Hub
//!
//! Log fan-out module.
//!
//! Responsibilities:
//! - Hold an ordered list of (sink, categories) registrations
//! - Filter registrations by category on each log call
//! - Dispatch each record to matching sinks sequentially, in registration order

pub mod error;
pub mod hub;
pub mod metrics;
pub mod registration;
pub mod sinks;

pub use contracts::{LogRecord, LogRequest, LogSink};
pub use error::HubError;
pub use hub::LogHub;
pub use metrics::{MetricsSnapshot, SinkMetrics};
pub use registration::Registration;
pub use sinks::{ConsoleSink, FileSink, MemorySink};
