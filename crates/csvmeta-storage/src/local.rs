use crate::keys::validate_path_segment;
use crate::traits::{Storage, StorageError, StorageResult, StoredObject};
use crate::StorageBackend;
use async_trait::async_trait;
use bytes::Bytes;
use std::io::ErrorKind;
use std::path::PathBuf;
use tokio::fs;

/// Local filesystem storage implementation
///
/// Buckets are directories under `base_path`; keys are paths within them.
#[derive(Clone, Debug)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    /// Create a new LocalStorage instance rooted at an existing directory
    pub async fn new(base_path: impl Into<PathBuf>) -> StorageResult<Self> {
        let base_path = base_path.into();

        let meta = fs::metadata(&base_path).await.map_err(|e| {
            StorageError::ConfigError(format!(
                "Storage directory {} is not accessible: {}",
                base_path.display(),
                e
            ))
        })?;
        if !meta.is_dir() {
            return Err(StorageError::ConfigError(format!(
                "Storage path {} is not a directory",
                base_path.display()
            )));
        }

        Ok(LocalStorage { base_path })
    }

    /// Convert bucket and key to a filesystem path with traversal checks
    fn object_path(&self, bucket: &str, key: &str) -> StorageResult<PathBuf> {
        validate_path_segment("bucket", bucket)?;
        validate_path_segment("key", key)?;
        Ok(self.base_path.join(bucket).join(key))
    }
}

#[async_trait]
impl Storage for LocalStorage {
    async fn get_object(&self, bucket: &str, key: &str) -> StorageResult<StoredObject> {
        let path = self.object_path(bucket, key)?;

        let data = fs::read(&path).await.map_err(|e| match e.kind() {
            ErrorKind::NotFound => StorageError::NotFound(format!("{}/{}", bucket, key)),
            ErrorKind::PermissionDenied => {
                StorageError::AccessDenied(format!("{}/{}", bucket, key))
            }
            _ => StorageError::IoError(e),
        })?;

        let content_length = data.len() as u64;

        tracing::debug!(
            path = %path.display(),
            size_bytes = content_length,
            "Local read successful"
        );

        Ok(StoredObject {
            data: Bytes::from(data),
            content_length,
        })
    }

    fn backend_type(&self) -> StorageBackend {
        StorageBackend::Local
    }
}
