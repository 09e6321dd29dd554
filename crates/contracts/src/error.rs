//! Layered error definitions
//!
//! Categorized by source: sink / serialization / io

use thiserror::Error;

/// Unified error type
#[derive(Debug, Error)]
pub enum ContractError {
    // ===== Sink Errors =====
    /// Sink failed to accept a record
    #[error("sink '{sink_name}' accept error: {message}")]
    SinkAccept { sink_name: String, message: String },

    /// Sink could not be created or opened
    #[error("sink '{sink_name}' open error: {message}")]
    SinkOpen { sink_name: String, message: String },

    // ===== General Errors =====
    /// Payload serialization error
    #[error("serialize error: {message}")]
    Serialize { message: String },

    /// IO error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Other error
    #[error("{0}")]
    Other(String),
}

impl ContractError {
    /// Create sink accept error
    pub fn sink_accept(sink_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::SinkAccept {
            sink_name: sink_name.into(),
            message: message.into(),
        }
    }

    /// Create sink open error
    pub fn sink_open(sink_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::SinkOpen {
            sink_name: sink_name.into(),
            message: message.into(),
        }
    }

    /// Create serialization error
    pub fn serialize(message: impl Into<String>) -> Self {
        Self::Serialize {
            message: message.into(),
        }
    }
}
