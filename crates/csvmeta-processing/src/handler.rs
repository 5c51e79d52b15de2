//! One invocation of the pipeline.
//!
//! Stages run strictly in order: event parsing, extraction, persistence,
//! notification. Extraction and persistence failures end the invocation;
//! notification cannot fail it. Nothing is retried here: the invoking
//! environment re-delivers the event if it wants another attempt.

use csvmeta_core::{ErrorMetadata, FileMetadata, LogLevel, S3Event};
use csvmeta_db::MetadataRepository;
use csvmeta_infra::NotificationDispatcher;
use std::sync::Arc;

use crate::error::PipelineError;
use crate::extractor::MetadataExtractor;
use crate::response::HandlerResponse;

#[derive(Clone)]
pub struct EventHandler {
    extractor: MetadataExtractor,
    repository: Arc<dyn MetadataRepository>,
    dispatcher: NotificationDispatcher,
}

impl EventHandler {
    pub fn new(
        extractor: MetadataExtractor,
        repository: Arc<dyn MetadataRepository>,
        dispatcher: NotificationDispatcher,
    ) -> Self {
        Self {
            extractor,
            repository,
            dispatcher,
        }
    }

    /// Process one storage event and build the invocation response.
    pub async fn handle(&self, event: &serde_json::Value) -> HandlerResponse {
        let result = match self.process(event).await {
            Ok(metadata) => metadata.to_json().map_err(PipelineError::from),
            Err(e) => Err(e),
        };

        match result {
            Ok(body) => HandlerResponse::ok(body),
            Err(err) => {
                log_failure(&err);
                HandlerResponse::from_error(&err)
            }
        }
    }

    /// Run the stages and return the stored metadata.
    pub async fn process(&self, event: &serde_json::Value) -> Result<FileMetadata, PipelineError> {
        let object = S3Event::first_object(event)?;

        tracing::info!(bucket = %object.bucket, key = %object.key, "Processing CSV");

        let metadata = self.extractor.extract(&object.bucket, &object.key).await?;

        self.repository.store(&metadata).await?;

        self.dispatcher.notify(&metadata).await;

        Ok(metadata)
    }
}

fn log_failure(err: &PipelineError) {
    let code = err.error_code();
    match err.log_level() {
        LogLevel::Debug => tracing::debug!(error = %err, error_code = code, "Invocation failed"),
        LogLevel::Warn => tracing::warn!(error = %err, error_code = code, "Invocation failed"),
        LogLevel::Error => {
            // AuthFailure displays a fixed message; keep the backend detail in the log.
            if let PipelineError::AuthFailure(ref detail) = err {
                tracing::error!(error = %detail, error_code = code, "Invocation failed");
            } else {
                tracing::error!(error = %err, error_code = code, "Invocation failed");
            }
        }
    }
}
