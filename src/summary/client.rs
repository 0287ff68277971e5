use super::prompt::build_prompt;
use super::{Message, SummaryRequest};
use crate::analysis::AggregateResult;
use crate::aws::BedrockRuntime;
use crate::config::ModelConfig;
use crate::error::AppError;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};

/// Summary text used when the model response has no usable content
pub const NO_SUMMARY_PLACEHOLDER: &str = "No summary generated";

const JSON_CONTENT_TYPE: &str = "application/json";

/// Client that turns aggregate results into natural-language summaries
#[derive(Clone)]
pub struct SummaryClient {
    runtime: Arc<dyn BedrockRuntime>,
    config: ModelConfig,
}

impl SummaryClient {
    pub fn new(runtime: Arc<dyn BedrockRuntime>, config: ModelConfig) -> Self {
        Self { runtime, config }
    }

    pub fn build_request(&self, result: &AggregateResult) -> SummaryRequest {
        SummaryRequest {
            anthropic_version: self.config.anthropic_version.clone(),
            max_tokens: self.config.max_tokens,
            messages: vec![Message::user(build_prompt(result, self.config.language))],
        }
    }

    /// Ask the model for a summary.
    ///
    /// Invocation failures are returned as errors; a response without a text
    /// content block yields `NO_SUMMARY_PLACEHOLDER`.
    pub async fn summarize(&self, result: &AggregateResult) -> Result<String, AppError> {
        self.config.validate()?;

        let request = self.build_request(result);
        let body = serde_json::to_vec(&request)?;

        debug!(
            model_id = %self.config.model_id,
            max_tokens = request.max_tokens,
            "Requesting sales summary"
        );

        let response = self
            .runtime
            .invoke_model(
                &self.config.model_id,
                Some(JSON_CONTENT_TYPE),
                Some(JSON_CONTENT_TYPE),
                body,
            )
            .await?;

        Ok(extract_summary_text(&response.body))
    }
}

/// Pull the text of the first content block out of a messages response
pub fn extract_summary_text(body: &[u8]) -> String {
    let text = serde_json::from_slice::<Value>(body).ok().and_then(|json| {
        json.get("content")?
            .as_array()?
            .first()?
            .get("text")?
            .as_str()
            .map(str::to_string)
    });

    match text {
        Some(text) if !text.is_empty() => text,
        _ => {
            warn!("Model response had no text content, using placeholder summary");
            NO_SUMMARY_PLACEHOLDER.to_string()
        }
    }
}
