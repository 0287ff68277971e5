//! Object storage access for the sales dataset

use crate::error::AppError;
use async_trait::async_trait;

pub mod file;
pub mod memory;
pub mod s3;

pub use file::FileObjectStore;
pub use memory::MemoryObjectStore;
pub use s3::S3ObjectStore;

/// Read-only object store trait for dependency injection and testing
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Fetch the full contents of `key` in `bucket`.
    ///
    /// Fails with `AppError::NotFound` when the object does not exist and
    /// `AppError::Access` when it exists but cannot be read.
    async fn get_object(&self, bucket: &str, key: &str) -> Result<Vec<u8>, AppError>;
}
