//! AWS Lambda handler

use crate::pipeline::{ResponseEnvelope, SalesAnalyzer};
use lambda_runtime::{Error as LambdaError, LambdaEvent};
use serde_json::Value;
use tracing::debug;

/// Handle one Lambda invocation.
///
/// The event payload is not inspected; every failure is reported through the
/// returned envelope, so the runtime only sees an error if it cannot be built.
pub async fn function_handler(
    analyzer: &SalesAnalyzer,
    event: LambdaEvent<Value>,
) -> Result<ResponseEnvelope, LambdaError> {
    let (_payload, context) = event.into_parts();
    debug!(request_id = %context.request_id, "Received invocation");

    Ok(analyzer.handle().await)
}
