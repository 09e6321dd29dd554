//! Fan-out Demo
//!
//! Registers a console sink, a category-tagged file sink, and an in-memory
//! capture sink on one hub, then issues filtered and unfiltered log calls.
//!
//! Run with: cargo run --bin fanout_demo

use std::sync::Arc;

use hub::{ConsoleSink, FileSink, LogHub, LogRequest, MemorySink};
use observability::{LogFormat, ObservabilityConfig};
use serde_json::json;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    observability::init_with_config(ObservabilityConfig {
        log_format: LogFormat::Pretty,
        default_log_level: "debug".to_string(),
    })?;

    tracing::info!("Starting fan-out demo");

    let mut hub = LogHub::new();

    // Console sink receives everything (no categories)
    hub.add_sink(Arc::new(ConsoleSink::new("console")), vec![]);

    // File sink only receives audit-tagged records
    let audit = Arc::new(FileSink::new("audit_file", "output/audit.jsonl")?);
    hub.add_sink(audit, vec!["audit".to_string()]);

    // Capture sink registered under two categories
    let capture = Arc::new(MemorySink::new("capture"));
    hub.add_sink(
        capture.clone(),
        vec!["audit".to_string(), "metrics".to_string()],
    );

    // Unfiltered: reaches every sink regardless of categories
    hub.log(LogRequest::message("service started").with_data(json!({"pid": 4242})))
        .await?;

    // Audit-tagged: file and capture sinks only; the console sink has no
    // categories and never matches a non-empty filter
    hub.log(
        LogRequest::message("user login")
            .with_data(json!({"user": "alice"}))
            .with_category("audit"),
    )
    .await?;

    // Metrics-tagged: only the capture sink
    hub.log(LogRequest::message("tick").with_category("metrics"))
        .await?;

    tracing::info!(captured = capture.call_count(), "Capture sink contents");
    for (name, snapshot) in hub.metrics() {
        tracing::info!(
            sink = %name,
            accepts = snapshot.accept_count,
            failures = snapshot.failure_count,
            "Sink metrics"
        );
    }

    Ok(())
}
