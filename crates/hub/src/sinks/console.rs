//! ConsoleSink - emits records via tracing

use async_trait::async_trait;
use contracts::{ContractError, LogRecord, LogSink};
use tracing::info;

/// Sink that emits records as structured tracing events
pub struct ConsoleSink {
    name: String,
}

impl ConsoleSink {
    /// Create a new ConsoleSink with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[async_trait]
impl LogSink for ConsoleSink {
    fn name(&self) -> &str {
        &self.name
    }

    async fn accept(&self, record: &LogRecord) -> Result<(), ContractError> {
        info!(
            sink = %self.name,
            message = record.message.as_deref().unwrap_or(""),
            has_data = record.data.is_some(),
            "Log record received"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_console_sink_accept() {
        let sink = ConsoleSink::new("test_console");
        let record = LogRecord::message("hello");

        let result = sink.accept(&record).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_console_sink_name() {
        let sink = ConsoleSink::new("my_console");
        assert_eq!(sink.name(), "my_console");
    }
}
