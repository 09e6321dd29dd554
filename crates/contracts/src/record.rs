//! Log entry value types
//!
//! `message`, `data`, and `category` are all independently omissible, so both
//! types are plain records with named optional fields rather than positional
//! parameter lists. `Default` yields the fully-absent value.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single log entry as delivered to sinks.
///
/// The hub never inspects `data`; it is carried verbatim.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LogRecord {
    /// Optional human-readable message
    pub message: Option<String>,
    /// Optional opaque payload
    pub data: Option<Value>,
}

impl LogRecord {
    /// Create a record with a message and no payload
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            data: None,
        }
    }

    /// Attach an opaque payload
    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }
}

/// A log call as issued by a caller: the record plus an optional category filter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LogRequest {
    /// Optional human-readable message
    pub message: Option<String>,
    /// Optional opaque payload
    pub data: Option<Value>,
    /// Optional category filter; absent or blank means "all sinks"
    pub category: Option<String>,
}

impl LogRequest {
    /// Create a request with a message only
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::default()
        }
    }

    /// Attach an opaque payload
    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    /// Restrict dispatch to sinks registered under `category`
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Effective category filter.
    ///
    /// Absent, empty, and whitespace-only categories all mean "no filter"
    /// and normalize to `None`. A non-blank filter is returned as-is: no
    /// trimming, matching is exact.
    pub fn category_filter(&self) -> Option<&str> {
        self.category
            .as_deref()
            .filter(|c| !c.trim().is_empty())
    }

    /// Split into the record delivered to sinks, dropping the filter
    pub fn into_record(self) -> LogRecord {
        LogRecord {
            message: self.message,
            data: self.data,
        }
    }
}
