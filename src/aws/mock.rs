use crate::aws::bedrock::{BedrockResponse, BedrockRuntime};
use crate::error::AppError;
use async_trait::async_trait;
use std::sync::Mutex;

/// Mock Bedrock runtime for pipeline tests.
/// Returns canned responses and records every invocation it receives.
pub struct MockBedrockRuntime {
    pub response_mode: MockResponseMode,
    invocations: Mutex<Vec<MockInvocation>>,
}

#[derive(Clone, Debug)]
pub enum MockResponseMode {
    /// Anthropic messages response whose first content block carries this text
    Text(String),
    /// Return this body verbatim
    RawBody(Vec<u8>),
    /// Fail the invocation itself
    Error(String),
}

#[derive(Clone, Debug)]
pub struct MockInvocation {
    pub model_id: String,
    pub content_type: Option<String>,
    pub accept: Option<String>,
    pub body: Vec<u8>,
}

impl MockInvocation {
    pub fn body_json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).unwrap_or(serde_json::Value::Null)
    }
}

impl MockBedrockRuntime {
    pub fn new() -> Self {
        Self::with_mode(MockResponseMode::Text("Mock sales summary".to_string()))
    }

    pub fn with_mode(response_mode: MockResponseMode) -> Self {
        Self {
            response_mode,
            invocations: Mutex::new(Vec::new()),
        }
    }

    pub fn with_text(text: &str) -> Self {
        Self::with_mode(MockResponseMode::Text(text.to_string()))
    }

    pub fn with_raw_body(body: &str) -> Self {
        Self::with_mode(MockResponseMode::RawBody(body.as_bytes().to_vec()))
    }

    pub fn with_error(message: &str) -> Self {
        Self::with_mode(MockResponseMode::Error(message.to_string()))
    }

    pub fn invocations(&self) -> Vec<MockInvocation> {
        self.invocations
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }

    pub fn invocation_count(&self) -> usize {
        self.invocations().len()
    }

    fn generate_response(&self) -> Result<BedrockResponse, AppError> {
        let body = match &self.response_mode {
            MockResponseMode::Text(text) => serde_json::json!({
                "id": "msg_mock",
                "type": "message",
                "role": "assistant",
                "content": [{"type": "text", "text": text}],
                "stop_reason": "end_turn"
            })
            .to_string()
            .into_bytes(),
            MockResponseMode::RawBody(body) => body.clone(),
            MockResponseMode::Error(message) => return Err(AppError::Model(message.clone())),
        };

        Ok(BedrockResponse { body })
    }
}

impl Default for MockBedrockRuntime {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BedrockRuntime for MockBedrockRuntime {
    async fn invoke_model(
        &self,
        model_id: &str,
        content_type: Option<&str>,
        accept: Option<&str>,
        body: Vec<u8>,
    ) -> Result<BedrockResponse, AppError> {
        if let Ok(mut calls) = self.invocations.lock() {
            calls.push(MockInvocation {
                model_id: model_id.to_string(),
                content_type: content_type.map(str::to_string),
                accept: accept.map(str::to_string),
                body,
            });
        }

        self.generate_response()
    }
}
