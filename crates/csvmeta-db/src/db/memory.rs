use async_trait::async_trait;
use csvmeta_core::FileMetadata;
use std::collections::HashMap;
use tokio::sync::RwLock;

use super::repository::{MetadataRepository, RepositoryResult};

/// In-process metadata store with the same overwrite semantics as the table.
#[derive(Debug, Default)]
pub struct InMemoryMetadataRepository {
    records: RwLock<HashMap<String, FileMetadata>>,
    writes: RwLock<u64>,
}

impl InMemoryMetadataRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get(&self, filename: &str) -> Option<FileMetadata> {
        self.records.read().await.get(filename).cloned()
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }

    /// Total successful writes, including overwrites.
    pub async fn write_count(&self) -> u64 {
        *self.writes.read().await
    }
}

#[async_trait]
impl MetadataRepository for InMemoryMetadataRepository {
    async fn store(&self, metadata: &FileMetadata) -> RepositoryResult<()> {
        let mut records = self.records.write().await;
        records.insert(metadata.filename.clone(), metadata.clone());
        *self.writes.write().await += 1;
        Ok(())
    }
}
