use crate::analysis::AggregateResult;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize, Serializer};

/// Successful outcome of one invocation
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub analysis: AggregateResult,
    pub summary: String,
    #[serde(serialize_with = "serialize_timestamp")]
    pub timestamp: DateTime<Utc>,
}

fn serialize_timestamp<S: Serializer>(
    value: &DateTime<Utc>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Micros, true))
}

/// Lambda proxy-style response: a status code and a JSON-encoded body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: String,
}

impl ResponseEnvelope {
    pub const OK: u16 = 200;
    pub const INTERNAL_ERROR: u16 = 500;

    pub fn success(report: &AnalysisReport) -> Self {
        match serde_json::to_string(report) {
            Ok(body) => Self {
                status_code: Self::OK,
                body,
            },
            Err(err) => Self::failure(&format!("failed to serialize analysis report: {}", err)),
        }
    }

    pub fn failure(message: &str) -> Self {
        Self {
            status_code: Self::INTERNAL_ERROR,
            body: serde_json::json!({ "error": message }).to_string(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status_code == Self::OK
    }

    /// Decode the body back into JSON
    pub fn body_json(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::from_str(&self.body)
    }
}
