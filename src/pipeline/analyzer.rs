use super::envelope::{AnalysisReport, ResponseEnvelope};
use crate::analysis::aggregate_csv;
use crate::aws::{AwsClients, BedrockRuntimeImpl};
use crate::config::{Config, SourceConfig};
use crate::error::AppError;
use crate::storage::{ObjectStore, S3ObjectStore};
use crate::summary::SummaryClient;
use chrono::Utc;
use rust_decimal::prelude::ToPrimitive;
use std::sync::Arc;
use tracing::{error, info};

/// Fetch, aggregate and summarize one sales dataset
#[derive(Clone)]
pub struct SalesAnalyzer {
    store: Arc<dyn ObjectStore>,
    summarizer: SummaryClient,
    source: SourceConfig,
}

impl SalesAnalyzer {
    pub fn new(
        store: Arc<dyn ObjectStore>,
        summarizer: SummaryClient,
        source: SourceConfig,
    ) -> Self {
        Self {
            store,
            summarizer,
            source,
        }
    }

    /// Build an analyzer backed by S3 and Bedrock.
    ///
    /// Missing settings are not rejected here; each invocation reports them.
    pub async fn from_config(config: &Config) -> Self {
        let clients = AwsClients::new(&config.aws).await;
        let store = Arc::new(S3ObjectStore::new(clients.s3));
        let runtime = Arc::new(BedrockRuntimeImpl::new(clients.bedrock));

        Self::new(
            store,
            SummaryClient::new(runtime, config.model.clone()),
            config.source.clone(),
        )
    }

    /// Run the pipeline, returning the first failure unchanged
    pub async fn analyze(&self) -> Result<AnalysisReport, AppError> {
        self.source.validate()?;

        let data = self
            .store
            .get_object(&self.source.bucket, &self.source.key)
            .await?;

        let analysis = aggregate_csv(&data)?;
        let summary = self.summarizer.summarize(&analysis).await?;

        Ok(AnalysisReport {
            analysis,
            summary,
            timestamp: Utc::now(),
        })
    }

    /// Run the pipeline and convert the outcome into a response envelope.
    ///
    /// Emits exactly one log record: `analysis_complete` or `error`.
    pub async fn handle(&self) -> ResponseEnvelope {
        match self.analyze().await {
            Ok(report) => {
                info!(
                    event = "analysis_complete",
                    total_sales = report.analysis.total_sales.to_f64().unwrap_or_default(),
                    bucket = %self.source.bucket,
                    key = %self.source.key
                );
                ResponseEnvelope::success(&report)
            }
            Err(err) => {
                let message = err.to_string();
                error!(event = "error", error = %message);
                ResponseEnvelope::failure(&message)
            }
        }
    }
}
