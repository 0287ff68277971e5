use crate::error::AppError;
use async_trait::async_trait;
use aws_sdk_bedrockruntime::Client as BedrockClient;
use aws_sdk_bedrockruntime::error::{DisplayErrorContext, ProvideErrorMetadata};
use aws_sdk_bedrockruntime::primitives::Blob;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct BedrockResponse {
    pub body: Vec<u8>,
}

// Trait for model invocation to enable mocking
#[async_trait]
pub trait BedrockRuntime: Send + Sync {
    async fn invoke_model(
        &self,
        model_id: &str,
        content_type: Option<&str>,
        accept: Option<&str>,
        body: Vec<u8>,
    ) -> Result<BedrockResponse, AppError>;
}

/// Bedrock runtime backed by the AWS SDK client
#[derive(Clone)]
pub struct BedrockRuntimeImpl {
    client: BedrockClient,
}

impl BedrockRuntimeImpl {
    pub fn new(client: BedrockClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl BedrockRuntime for BedrockRuntimeImpl {
    async fn invoke_model(
        &self,
        model_id: &str,
        content_type: Option<&str>,
        accept: Option<&str>,
        body: Vec<u8>,
    ) -> Result<BedrockResponse, AppError> {
        debug!(model_id, body_len = body.len(), "Invoking Bedrock model");

        let mut request = self
            .client
            .invoke_model()
            .model_id(model_id)
            .body(Blob::new(body));

        if let Some(ct) = content_type {
            request = request.content_type(ct);
        }
        if let Some(acc) = accept {
            request = request.accept(acc);
        }

        let output = request.send().await.map_err(|err| {
            let message = match (err.code(), err.message()) {
                (Some(code), Some(message)) => format!("{}: {}", code, message),
                _ => DisplayErrorContext(&err).to_string(),
            };
            AppError::Model(message)
        })?;

        Ok(BedrockResponse {
            body: output.body.into_inner(),
        })
    }
}
