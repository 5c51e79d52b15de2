//! In-memory collaborators for handler tests.

#![allow(dead_code)]

use async_trait::async_trait;
use bytes::Bytes;
use csvmeta_core::{FileMetadata, S3Event, StorageBackend};
use csvmeta_db::{InMemoryMetadataRepository, MetadataRepository, RepositoryError, RepositoryResult};
use csvmeta_infra::{NotificationDispatcher, Notifier, NotifyError, NotifyResult};
use csvmeta_processing::{EventHandler, MetadataExtractor};
use csvmeta_storage::{Storage, StorageError, StorageResult, StoredObject};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

pub const BUCKET: &str = "csv-bucket";

/// Object storage backed by a map, with an optional forced failure.
#[derive(Default)]
pub struct MemoryStorage {
    objects: Mutex<HashMap<(String, String), StoredObject>>,
    failure: Mutex<Option<fn(&str, &str) -> StorageError>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put(&self, bucket: &str, key: &str, content: &[u8]) {
        self.put_with_length(bucket, key, content, content.len() as u64);
    }

    /// Store an object whose reported size differs from its body length.
    pub fn put_with_length(&self, bucket: &str, key: &str, content: &[u8], length: u64) {
        self.objects.lock().unwrap().insert(
            (bucket.to_string(), key.to_string()),
            StoredObject {
                data: Bytes::copy_from_slice(content),
                content_length: length,
            },
        );
    }

    pub fn fail_with(&self, failure: fn(&str, &str) -> StorageError) {
        *self.failure.lock().unwrap() = Some(failure);
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn get_object(&self, bucket: &str, key: &str) -> StorageResult<StoredObject> {
        if let Some(failure) = *self.failure.lock().unwrap() {
            return Err(failure(bucket, key));
        }
        self.objects
            .lock()
            .unwrap()
            .get(&(bucket.to_string(), key.to_string()))
            .cloned()
            .ok_or_else(|| StorageError::NotFound(format!("{}/{}", bucket, key)))
    }

    fn backend_type(&self) -> StorageBackend {
        StorageBackend::S3
    }
}

/// Repository that rejects every write.
pub struct FailingRepository(pub fn() -> RepositoryError);

#[async_trait]
impl MetadataRepository for FailingRepository {
    async fn store(&self, _metadata: &FileMetadata) -> RepositoryResult<()> {
        Err((self.0)())
    }
}

/// Notifier that keeps every published message.
#[derive(Default)]
pub struct RecordingNotifier {
    pub published: Mutex<Vec<(String, String)>>,
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn publish(&self, subject: &str, message: &str) -> NotifyResult<()> {
        self.published
            .lock()
            .unwrap()
            .push((subject.to_string(), message.to_string()));
        Ok(())
    }

    fn topic(&self) -> &str {
        "arn:aws:sns:us-east-1:000000000000:CSVProcessingTopic"
    }
}

/// Notifier whose topic does not exist.
pub struct FailingNotifier;

#[async_trait]
impl Notifier for FailingNotifier {
    async fn publish(&self, _subject: &str, _message: &str) -> NotifyResult<()> {
        Err(NotifyError::PublishFailed(
            "AuthorizationError: not authorized to publish".to_string(),
        ))
    }

    fn topic(&self) -> &str {
        "arn:aws:sns:us-east-1:000000000000:Missing"
    }
}

pub struct TestPipeline {
    pub storage: Arc<MemoryStorage>,
    pub repository: Arc<InMemoryMetadataRepository>,
    pub notifier: Arc<RecordingNotifier>,
    pub handler: EventHandler,
}

/// Handler wired to in-memory storage, repository and notifier.
pub fn test_pipeline() -> TestPipeline {
    let storage = Arc::new(MemoryStorage::new());
    let repository = Arc::new(InMemoryMetadataRepository::new());
    let notifier = Arc::new(RecordingNotifier::default());

    let handler = EventHandler::new(
        MetadataExtractor::new(storage.clone()),
        repository.clone(),
        NotificationDispatcher::new(notifier.clone()),
    );

    TestPipeline {
        storage,
        repository,
        notifier,
        handler,
    }
}

pub fn handler_with(
    storage: Arc<dyn Storage>,
    repository: Arc<dyn MetadataRepository>,
    notifier: Arc<dyn Notifier>,
) -> EventHandler {
    EventHandler::new(
        MetadataExtractor::new(storage),
        repository,
        NotificationDispatcher::new(notifier),
    )
}

pub fn event_for(key: &str) -> serde_json::Value {
    serde_json::to_value(S3Event::for_object(BUCKET, key)).unwrap()
}
