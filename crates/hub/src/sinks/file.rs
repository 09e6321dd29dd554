//! FileSink - appends records to a JSON-lines file

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use contracts::{ContractError, LogRecord, LogSink};
use tokio::sync::Mutex;
use tracing::debug;

/// Sink that appends one JSON object per record to a file.
///
/// `accept` takes `&self`, so the writer sits behind an async mutex; calls
/// through the hub are sequential anyway, the lock only matters when the
/// same sink instance is registered on several hubs.
pub struct FileSink {
    name: String,
    path: PathBuf,
    writer: Mutex<File>,
}

impl FileSink {
    /// Create a new FileSink appending to `path`.
    ///
    /// Parent directories are created as needed; an existing file is
    /// appended to, not truncated.
    pub fn new(name: impl Into<String>, path: impl AsRef<Path>) -> Result<Self, ContractError> {
        let name = name.into();
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| ContractError::sink_open(&name, e.to_string()))?;

        debug!(sink = %name, path = %path.display(), "FileSink opened");

        Ok(Self {
            name,
            path,
            writer: Mutex::new(file),
        })
    }

    /// Path this sink writes to
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl LogSink for FileSink {
    fn name(&self) -> &str {
        &self.name
    }

    async fn accept(&self, record: &LogRecord) -> Result<(), ContractError> {
        let mut line =
            serde_json::to_string(record).map_err(|e| ContractError::serialize(e.to_string()))?;
        line.push('\n');

        let mut writer = self.writer.lock().await;
        writer
            .write_all(line.as_bytes())
            .map_err(|e| ContractError::sink_accept(&self.name, e.to_string()))?;
        writer
            .flush()
            .map_err(|e| ContractError::sink_accept(&self.name, e.to_string()))?;

        Ok(())
    }
}
