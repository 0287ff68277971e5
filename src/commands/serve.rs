use super::CommandResult;
use crate::Config;
use crate::handler::function_handler;
use crate::pipeline::SalesAnalyzer;
use lambda_runtime::{LambdaEvent, service_fn};
use serde_json::Value;
use std::sync::Arc;
use tracing::{info, warn};

pub async fn handle_serve_command(config: Config) -> CommandResult {
    if let Err(err) = config.validate() {
        warn!(error = %err, "Configuration incomplete, invocations will fail");
    }
    let analyzer = Arc::new(SalesAnalyzer::from_config(&config).await);

    info!(
        bucket = %config.source.bucket,
        key = %config.source.key,
        model_id = %config.model.model_id,
        "Starting Lambda runtime"
    );

    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| {
        let analyzer = Arc::clone(&analyzer);
        async move { function_handler(&analyzer, event).await }
    }))
    .await
}
