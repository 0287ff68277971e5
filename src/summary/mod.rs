//! Natural-language summaries of aggregated sales via Anthropic models on Bedrock

pub mod client;
pub mod prompt;

use serde::{Deserialize, Serialize};

pub use client::{NO_SUMMARY_PLACEHOLDER, SummaryClient, extract_summary_text};
pub use prompt::{build_prompt, format_thousands};

/// Protocol version tag Bedrock expects for Anthropic messages requests
pub const DEFAULT_ANTHROPIC_VERSION: &str = "bedrock-2023-05-31";

/// Output token budget for the summary
pub const DEFAULT_MAX_TOKENS: u32 = 200;

/// Language the model is asked to answer in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PromptLanguage {
    #[default]
    Ja,
    En,
}

/// Bedrock request body for Anthropic messages models
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryRequest {
    pub anthropic_version: String,
    pub max_tokens: u32,
    pub messages: Vec<Message>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: String,
    pub content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}
