//! MemorySink - captures records in memory for inspection

use std::sync::Mutex;

use async_trait::async_trait;
use contracts::{ContractError, LogRecord, LogSink};

/// Sink that stores every accepted record, for tests and demos
#[derive(Debug)]
pub struct MemorySink {
    name: String,
    records: Mutex<Vec<LogRecord>>,
}

impl MemorySink {
    /// Create a new MemorySink with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            records: Mutex::new(Vec::new()),
        }
    }

    /// Snapshot of all records accepted so far, in arrival order
    pub fn records(&self) -> Vec<LogRecord> {
        self.records.lock().unwrap().clone()
    }

    /// Number of accept calls observed
    pub fn call_count(&self) -> usize {
        self.records.lock().unwrap().len()
    }
}

#[async_trait]
impl LogSink for MemorySink {
    fn name(&self) -> &str {
        &self.name
    }

    async fn accept(&self, record: &LogRecord) -> Result<(), ContractError> {
        self.records.lock().unwrap().push(record.clone());
        Ok(())
    }
}
