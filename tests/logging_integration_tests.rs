mod common;

use common::{EXAMPLE_CSV, LogCapture, TestHarness};
use lambda_runtime::{Context, LambdaEvent};
use sales_insight::handler::function_handler;
use sales_insight::logging::json_subscriber;
use serde_json::json;
use tracing_subscriber::EnvFilter;

fn capture() -> (LogCapture, tracing::subscriber::DefaultGuard) {
    let logs = LogCapture::new();
    let subscriber = json_subscriber(EnvFilter::new("info"), logs.clone());
    let guard = tracing::subscriber::set_default(subscriber);
    (logs, guard)
}

fn assert_timestamp(record: &serde_json::Value) {
    let timestamp = record["timestamp"].as_str().unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(timestamp).is_ok());
}

#[tokio::test]
async fn test_success_logs_one_analysis_complete_record() {
    let (logs, _guard) = capture();
    let harness = TestHarness::with_csv(EXAMPLE_CSV);

    let envelope = harness.analyzer.handle().await;
    assert_eq!(envelope.status_code, 200);

    let records = logs.records();
    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert_eq!(record["event"], "analysis_complete");
    assert_eq!(record["total_sales"], 225.0);
    assert_eq!(record["level"], "INFO");
    assert!(record.get("error").is_none());
    assert_timestamp(record);
}

#[tokio::test]
async fn test_failure_logs_one_error_record() {
    let (logs, _guard) = capture();
    let harness = TestHarness::empty();

    let envelope = harness.analyzer.handle().await;
    assert_eq!(envelope.status_code, 500);

    let records = logs.records();
    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert_eq!(record["event"], "error");
    assert_eq!(record["level"], "ERROR");
    assert!(record.get("total_sales").is_none());
    assert_timestamp(record);

    let body = envelope.body_json().unwrap();
    assert_eq!(record["error"], body["error"]);
    assert!(record["error"].as_str().unwrap().contains("not found"));
}

#[tokio::test]
async fn test_lambda_invocation_logs_one_record() {
    let (logs, _guard) = capture();
    let harness = TestHarness::with_csv(EXAMPLE_CSV);

    let event = LambdaEvent::new(json!({}), Context::default());
    function_handler(&harness.analyzer, event).await.unwrap();

    let records = logs.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["event"], "analysis_complete");
}
