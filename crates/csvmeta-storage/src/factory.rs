#[cfg(feature = "storage-local")]
use crate::LocalStorage;
#[cfg(feature = "storage-s3")]
use crate::S3Storage;
use crate::{Storage, StorageBackend, StorageError, StorageResult};
use aws_config::SdkConfig;
use csvmeta_core::Config;
use std::sync::Arc;

/// Create a storage backend based on configuration
///
/// `sdk_config` is only consulted for the S3 backend.
pub async fn create_storage(
    config: &Config,
    #[cfg_attr(not(feature = "storage-s3"), allow(unused_variables))] sdk_config: &SdkConfig,
) -> StorageResult<Arc<dyn Storage>> {
    match config.storage_backend {
        #[cfg(feature = "storage-s3")]
        StorageBackend::S3 => Ok(Arc::new(S3Storage::new(sdk_config))),

        #[cfg(not(feature = "storage-s3"))]
        StorageBackend::S3 => Err(StorageError::ConfigError(
            "S3 storage backend not available (storage-s3 feature not enabled)".to_string(),
        )),

        #[cfg(feature = "storage-local")]
        StorageBackend::Local => {
            let base_path = config.local_storage_path.clone().ok_or_else(|| {
                StorageError::ConfigError("LOCAL_STORAGE_PATH not configured".to_string())
            })?;
            let storage = LocalStorage::new(base_path).await?;
            Ok(Arc::new(storage))
        }

        #[cfg(not(feature = "storage-local"))]
        StorageBackend::Local => Err(StorageError::ConfigError(
            "Local storage backend not available (storage-local feature not enabled)".to_string(),
        )),
    }
}

#[cfg(all(test, feature = "storage-local"))]
mod tests {
    use super::*;
    use aws_config::{BehaviorVersion, Region};
    use tempfile::tempdir;

    fn sdk_config() -> SdkConfig {
        SdkConfig::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new("us-east-1"))
            .build()
    }

    #[tokio::test]
    async fn test_create_local_storage() {
        let dir = tempdir().unwrap();
        let config = Config {
            storage_backend: StorageBackend::Local,
            local_storage_path: Some(dir.path().to_path_buf()),
            ..Config::default()
        };

        let storage = create_storage(&config, &sdk_config()).await.unwrap();
        assert_eq!(storage.backend_type(), StorageBackend::Local);
    }

    #[tokio::test]
    async fn test_local_backend_requires_path() {
        let config = Config {
            storage_backend: StorageBackend::Local,
            local_storage_path: None,
            ..Config::default()
        };

        let result = create_storage(&config, &sdk_config()).await;
        assert!(matches!(result, Err(StorageError::ConfigError(_))));
    }
}
