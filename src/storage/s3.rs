use super::ObjectStore;
use crate::error::AppError;
use async_trait::async_trait;
use aws_sdk_s3::Client;
use aws_sdk_s3::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_s3::operation::get_object::GetObjectError;
use tracing::debug;

/// S3-backed object store
#[derive(Clone)]
pub struct S3ObjectStore {
    client: Client,
}

impl S3ObjectStore {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    async fn get_object(&self, bucket: &str, key: &str) -> Result<Vec<u8>, AppError> {
        debug!(bucket, key, "Fetching object from S3");

        let output = self
            .client
            .get_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await
            .map_err(|err| classify_get_object_error(bucket, key, &err))?;

        let data = output.body.collect().await.map_err(|e| AppError::Access {
            bucket: bucket.to_string(),
            key: key.to_string(),
            message: format!("failed to read object body: {}", e),
        })?;

        Ok(data.into_bytes().to_vec())
    }
}

/// Map a `GetObject` failure onto the not-found / access split
fn classify_get_object_error<R>(
    bucket: &str,
    key: &str,
    err: &SdkError<GetObjectError, R>,
) -> AppError
where
    R: std::fmt::Debug,
{
    if let SdkError::ServiceError(service_err) = err {
        let inner = service_err.err();
        if inner.is_no_such_key() || inner.code() == Some("NoSuchBucket") {
            return AppError::NotFound {
                bucket: bucket.to_string(),
                key: key.to_string(),
            };
        }
    }

    AppError::Access {
        bucket: bucket.to_string(),
        key: key.to_string(),
        message: DisplayErrorContext(err).to_string(),
    }
}
