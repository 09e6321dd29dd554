//! LogSink trait - hub output interface
//!
//! Defines the abstract capability every logging backend implements.

use async_trait::async_trait;

use crate::{ContractError, LogRecord};

/// Log output trait
///
/// All sink implementations must implement this trait. Sinks are shared as
/// `Arc<dyn LogSink>`, so `accept` takes `&self`; implementations needing
/// mutable state use interior mutability.
#[async_trait]
pub trait LogSink: Send + Sync {
    /// Sink name (used for logging/metrics)
    fn name(&self) -> &str;

    /// Accept one log record
    ///
    /// Returns once the sink has fully processed the entry.
    ///
    /// # Errors
    /// Returns accept error (should include context)
    async fn accept(&self, record: &LogRecord) -> Result<(), ContractError>;
}
