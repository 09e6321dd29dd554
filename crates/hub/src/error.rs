//! Hub error types

use thiserror::Error;

/// Hub-specific errors
#[derive(Debug, Error)]
pub enum HubError {
    /// A sink failed while accepting a record; dispatch stopped there
    #[error("sink '{sink}' failed to accept record")]
    SinkAccept {
        sink: String,
        #[source]
        source: contracts::ContractError,
    },
}

impl HubError {
    /// Create a sink accept error
    pub fn sink_accept(sink: impl Into<String>, source: contracts::ContractError) -> Self {
        Self::SinkAccept {
            sink: sink.into(),
            source,
        }
    }

    /// Name of the sink that failed
    pub fn sink_name(&self) -> &str {
        match self {
            Self::SinkAccept { sink, .. } => sink,
        }
    }
}
