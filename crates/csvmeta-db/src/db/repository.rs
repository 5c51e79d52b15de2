use async_trait::async_trait;
use csvmeta_core::FileMetadata;
use thiserror::Error;

/// Metadata store errors
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Metadata store credentials missing or rejected: {0}")]
    Credentials(String),

    #[error("Metadata table not found: {0}")]
    TableNotFound(String),

    #[error("Metadata store throttled the write: {0}")]
    Throttled(String),

    #[error("Failed to store metadata: {0}")]
    PutFailed(String),
}

impl RepositoryError {
    pub fn is_credentials(&self) -> bool {
        matches!(self, RepositoryError::Credentials(_))
    }
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Durable store of one metadata record per file.
#[async_trait]
pub trait MetadataRepository: Send + Sync {
    /// Write the full record keyed by `metadata.filename`, replacing any
    /// existing record. Not retried on failure.
    async fn store(&self, metadata: &FileMetadata) -> RepositoryResult<()>;
}
