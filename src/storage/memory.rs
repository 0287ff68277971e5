use super::ObjectStore;
use crate::error::AppError;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Mutex, RwLock};

/// In-memory object store for tests
#[derive(Debug, Default)]
pub struct MemoryObjectStore {
    objects: RwLock<HashMap<(String, String), Vec<u8>>>,
    reads: Mutex<Vec<(String, String)>>,
    denied: RwLock<Option<String>>,
}

impl MemoryObjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_object(self, bucket: &str, key: &str, data: impl Into<Vec<u8>>) -> Self {
        self.put_object(bucket, key, data);
        self
    }

    pub fn put_object(&self, bucket: &str, key: &str, data: impl Into<Vec<u8>>) {
        if let Ok(mut objects) = self.objects.write() {
            objects.insert((bucket.to_string(), key.to_string()), data.into());
        }
    }

    /// Make every read fail with an access error carrying `message`
    pub fn deny_access(&self, message: &str) {
        if let Ok(mut denied) = self.denied.write() {
            *denied = Some(message.to_string());
        }
    }

    /// (bucket, key) pairs requested so far
    pub fn reads(&self) -> Vec<(String, String)> {
        self.reads
            .lock()
            .map(|reads| reads.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl ObjectStore for MemoryObjectStore {
    async fn get_object(&self, bucket: &str, key: &str) -> Result<Vec<u8>, AppError> {
        if let Ok(mut reads) = self.reads.lock() {
            reads.push((bucket.to_string(), key.to_string()));
        }

        let denied = self.denied.read().ok().and_then(|denied| denied.clone());
        if let Some(message) = denied {
            return Err(AppError::Access {
                bucket: bucket.to_string(),
                key: key.to_string(),
                message,
            });
        }

        self.objects
            .read()
            .ok()
            .and_then(|objects| objects.get(&(bucket.to_string(), key.to_string())).cloned())
            .ok_or_else(|| AppError::NotFound {
                bucket: bucket.to_string(),
                key: key.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_get_existing_object() {
        let store = MemoryObjectStore::new().with_object("bucket", "key.csv", "data");
        let data = store.get_object("bucket", "key.csv").await.unwrap();

        assert_eq!(data, b"data");
        assert_eq!(
            store.reads(),
            vec![("bucket".to_string(), "key.csv".to_string())]
        );
    }

    #[tokio::test]
    async fn test_missing_object_and_wrong_bucket() {
        let store = MemoryObjectStore::new().with_object("bucket", "key.csv", "data");

        assert!(matches!(
            store.get_object("bucket", "other.csv").await,
            Err(AppError::NotFound { .. })
        ));
        assert!(matches!(
            store.get_object("other", "key.csv").await,
            Err(AppError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_denied_access() {
        let store = MemoryObjectStore::new().with_object("bucket", "key.csv", "data");
        store.deny_access("AccessDenied");

        let err = store.get_object("bucket", "key.csv").await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "Failed to read object bucket/key.csv: AccessDenied"
        );
    }
}
