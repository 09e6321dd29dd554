//! # Integration Tests
//!
//! End-to-end tests driving the hub through its public API with real sinks.

#[cfg(test)]
mod contract_tests {
    #[test]
    fn test_contracts_compile() {
        let request = contracts::LogRequest::default();
        assert!(request.category_filter().is_none());
    }
}

#[cfg(test)]
mod e2e_tests {
    use std::sync::Arc;

    use hub::{FileSink, LogHub, LogRecord, LogRequest, MemorySink};
    use serde_json::json;

    fn cats(labels: &[&str]) -> Vec<String> {
        labels.iter().map(|c| c.to_string()).collect()
    }

    /// End-to-end: register mixed sinks, dispatch with and without filters,
    /// verify delivery, file contents, and metrics.
    #[tokio::test]
    async fn test_e2e_fanout_pipeline() {
        let dir = tempfile::tempdir().unwrap();
        let file_path = dir.path().join("audit.jsonl");

        let mut hub = LogHub::new();
        let capture = Arc::new(MemorySink::new("capture"));
        let audit_file = Arc::new(FileSink::new("audit_file", &file_path).unwrap());

        hub.add_sink(capture.clone(), vec![]);
        hub.add_sink(audit_file.clone(), cats(&["audit"]));

        // Unfiltered call reaches both sinks
        hub.log(LogRequest::message("boot").with_data(json!({"pid": 1})))
            .await
            .unwrap();

        // Filtered call reaches only the audit file
        hub.log(LogRequest::message("login").with_category("audit"))
            .await
            .unwrap();

        // Unknown category reaches neither (capture has no categories)
        hub.log(LogRequest::message("noise").with_category("debug"))
            .await
            .unwrap();

        let captured = capture.records();
        assert_eq!(captured.len(), 1);
        assert_eq!(captured[0].message.as_deref(), Some("boot"));
        assert_eq!(captured[0].data, Some(json!({"pid": 1})));

        let contents = std::fs::read_to_string(&file_path).unwrap();
        let records: Vec<LogRecord> = contents
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].message.as_deref(), Some("boot"));
        assert_eq!(records[1].message.as_deref(), Some("login"));

        let metrics = hub.metrics();
        assert_eq!(metrics[0].0, "capture");
        assert_eq!(metrics[0].1.accept_count, 1);
        assert_eq!(metrics[1].0, "audit_file");
        assert_eq!(metrics[1].1.accept_count, 2);
    }

    /// The documented category scenario: sinks under {A, C} and {B, C}.
    #[tokio::test]
    async fn test_e2e_category_routing() {
        let mut hub = LogHub::new();
        let sink_a = Arc::new(MemorySink::new("sink_a"));
        let sink_b = Arc::new(MemorySink::new("sink_b"));
        hub.add_sink(sink_a.clone(), cats(&["categoryA", "categoryC"]));
        hub.add_sink(sink_b.clone(), cats(&["categoryB", "categoryC"]));

        hub.log(LogRequest::message("x").with_category("categoryC"))
            .await
            .unwrap();
        assert_eq!((sink_a.call_count(), sink_b.call_count()), (1, 1));

        hub.log(LogRequest::message("x").with_category("categoryA"))
            .await
            .unwrap();
        assert_eq!((sink_a.call_count(), sink_b.call_count()), (2, 1));

        hub.log(LogRequest::message("x").with_category("categoryD"))
            .await
            .unwrap();
        assert_eq!((sink_a.call_count(), sink_b.call_count()), (2, 1));

        hub.log(LogRequest::message("x")).await.unwrap();
        assert_eq!((sink_a.call_count(), sink_b.call_count()), (3, 2));
    }
}
