use crate::traits::{Storage, StorageError, StorageResult, StoredObject};
use crate::StorageBackend;
use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_s3::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_s3::operation::get_object::GetObjectError;
use aws_sdk_s3::Client as S3Client;
use csvmeta_infra::{is_credentials_code, is_credentials_failure};

/// Error codes S3 (and S3-compatible stores) use for permission failures.
const ACCESS_DENIED_CODES: &[&str] = &["AccessDenied", "Forbidden", "AllAccessDisabled"];

/// S3 storage implementation
#[derive(Clone)]
pub struct S3Storage {
    client: S3Client,
}

impl S3Storage {
    /// Create a new S3Storage from the shared SDK configuration
    ///
    /// Path-style addressing is used whenever an endpoint override is configured
    /// (LocalStack, MinIO), since those endpoints do not resolve
    /// `{bucket}.{host}` virtual hosts.
    pub fn new(sdk_config: &SdkConfig) -> Self {
        let force_path_style = sdk_config.endpoint_url().is_some();
        let s3_config = aws_sdk_s3::config::Builder::from(sdk_config)
            .force_path_style(force_path_style)
            .build();

        Self::from_client(S3Client::from_conf(s3_config))
    }

    pub fn from_client(client: S3Client) -> Self {
        Self { client }
    }

    fn classify_error<R>(bucket: &str, key: &str, err: SdkError<GetObjectError, R>) -> StorageError
    where
        R: std::fmt::Debug + Send + Sync + 'static,
    {
        let location = format!("{}/{}", bucket, key);
        let detail = DisplayErrorContext(&err).to_string();

        if is_credentials_code(err.code()) || is_credentials_failure(&err) {
            return StorageError::Credentials(detail);
        }
        if err.as_service_error().is_some_and(|e| e.is_no_such_key()) || err.code() == Some("NotFound")
        {
            return StorageError::NotFound(location);
        }
        if err
            .code()
            .is_some_and(|code| ACCESS_DENIED_CODES.contains(&code))
        {
            return StorageError::AccessDenied(location);
        }
        StorageError::DownloadFailed(detail)
    }
}

#[async_trait]
impl Storage for S3Storage {
    async fn get_object(&self, bucket: &str, key: &str) -> StorageResult<StoredObject> {
        let start = std::time::Instant::now();

        let output = self
            .client
            .get_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| {
                let err = Self::classify_error(bucket, key, e);
                tracing::error!(
                    error = %err,
                    bucket = %bucket,
                    key = %key,
                    duration_ms = start.elapsed().as_secs_f64() * 1000.0,
                    "S3 download failed"
                );
                err
            })?;

        let reported_length = output.content_length();

        let data = output
            .body
            .collect()
            .await
            .map_err(|e| StorageError::DownloadFailed(e.to_string()))?
            .into_bytes();

        let content_length = reported_length
            .and_then(|len| u64::try_from(len).ok())
            .unwrap_or(data.len() as u64);

        tracing::info!(
            bucket = %bucket,
            key = %key,
            size_bytes = content_length,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "S3 download successful"
        );

        Ok(StoredObject {
            data,
            content_length,
        })
    }

    fn backend_type(&self) -> StorageBackend {
        StorageBackend::S3
    }
}
