use super::CommandResult;
use crate::Config;
use crate::aws::{AwsClients, BedrockRuntimeImpl};
use crate::pipeline::SalesAnalyzer;
use crate::storage::FileObjectStore;
use crate::summary::SummaryClient;
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub async fn handle_run_command(mut config: Config, file: Option<PathBuf>) -> CommandResult {
    let analyzer = match file {
        Some(path) => {
            let (bucket, key) = split_local_path(&path)?;
            config.source.bucket = bucket;
            config.source.key = key;
            config.validate()?;

            let clients = AwsClients::new(&config.aws).await;
            SalesAnalyzer::new(
                Arc::new(FileObjectStore::new()),
                SummaryClient::new(
                    Arc::new(BedrockRuntimeImpl::new(clients.bedrock)),
                    config.model.clone(),
                ),
                config.source.clone(),
            )
        }
        None => {
            config.validate()?;
            SalesAnalyzer::from_config(&config).await
        }
    };

    let envelope = analyzer.handle().await;
    println!("{}", serde_json::to_string_pretty(&envelope)?);

    if envelope.is_success() {
        Ok(())
    } else {
        Err(format!("analysis failed with status {}", envelope.status_code).into())
    }
}

/// Split a local CSV path into the directory and file name the file store expects
fn split_local_path(path: &Path) -> Result<(String, String), lambda_runtime::Error> {
    let key = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| format!("not a file path: {}", path.display()))?;

    let bucket = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_string_lossy().into_owned(),
        _ => ".".to_string(),
    };

    Ok((bucket, key.to_string()))
}
