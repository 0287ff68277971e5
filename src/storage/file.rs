use super::ObjectStore;
use crate::error::AppError;
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Local-disk object store where the bucket is a directory and the key a
/// path relative to it. Used to replay a CSV file without S3.
#[derive(Debug, Clone, Default)]
pub struct FileObjectStore;

impl FileObjectStore {
    pub fn new() -> Self {
        Self
    }

    pub fn resolve(bucket: &str, key: &str) -> PathBuf {
        Path::new(bucket).join(key)
    }
}

#[async_trait]
impl ObjectStore for FileObjectStore {
    async fn get_object(&self, bucket: &str, key: &str) -> Result<Vec<u8>, AppError> {
        let path = Self::resolve(bucket, key);

        tokio::fs::read(&path).await.map_err(|e| match e.kind() {
            ErrorKind::NotFound => AppError::NotFound {
                bucket: bucket.to_string(),
                key: key.to_string(),
            },
            _ => AppError::Access {
                bucket: bucket.to_string(),
                key: key.to_string(),
                message: e.to_string(),
            },
        })
    }
}
