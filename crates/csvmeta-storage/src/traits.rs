//! Storage abstraction trait
//!
//! This module defines the Storage trait that all object storage backends implement.

use crate::StorageBackend;
use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("File not found: {0}")]
    NotFound(String),

    #[error("Access denied: {0}")]
    AccessDenied(String),

    #[error("Storage credentials missing or rejected: {0}")]
    Credentials(String),

    #[error("Download failed: {0}")]
    DownloadFailed(String),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl StorageError {
    /// Whether the failure comes from missing or rejected credentials rather than
    /// from the object itself.
    pub fn is_credentials(&self) -> bool {
        matches!(self, StorageError::Credentials(_))
    }
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Object body together with the size reported by the backend.
#[derive(Debug, Clone)]
pub struct StoredObject {
    pub data: Bytes,
    /// Size from the object's metadata (`Content-Length` for S3).
    pub content_length: u64,
}

/// Storage abstraction trait
///
/// The pipeline only reads: one object per invocation, addressed by bucket and key.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Fetch an object's full content and its byte length.
    async fn get_object(&self, bucket: &str, key: &str) -> StorageResult<StoredObject>;

    /// Get the storage backend type
    fn backend_type(&self) -> StorageBackend;
}
