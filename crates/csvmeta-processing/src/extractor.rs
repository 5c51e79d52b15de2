use chrono::Utc;
use csvmeta_core::FileMetadata;
use csvmeta_storage::Storage;
use std::sync::Arc;

use crate::csv_scan::CsvScanner;
use crate::error::ExtractionError;

/// Reads an object and derives its [`FileMetadata`].
#[derive(Clone)]
pub struct MetadataExtractor {
    storage: Arc<dyn Storage>,
    scanner: CsvScanner,
}

impl MetadataExtractor {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self {
            storage,
            scanner: CsvScanner::default(),
        }
    }

    pub fn with_scanner(mut self, scanner: CsvScanner) -> Self {
        self.scanner = scanner;
        self
    }

    pub async fn extract(&self, bucket: &str, key: &str) -> Result<FileMetadata, ExtractionError> {
        let object = self.storage.get_object(bucket, key).await?;

        let text = std::str::from_utf8(&object.data).map_err(|source| {
            tracing::error!(bucket = %bucket, key = %key, error = %source, "Object is not valid UTF-8");
            ExtractionError::Decode {
                key: key.to_string(),
                source,
            }
        })?;

        let shape = self.scanner.scan(text).map_err(|source| {
            tracing::error!(bucket = %bucket, key = %key, error = %source, "CSV parsing failed");
            ExtractionError::Parse {
                key: key.to_string(),
                source,
            }
        })?;

        let metadata = FileMetadata::new(
            key,
            Utc::now(),
            object.content_length,
            shape.row_count,
            shape.column_names,
        );

        tracing::info!(
            filename = %metadata.filename,
            file_size_bytes = metadata.file_size_bytes,
            row_count = metadata.row_count,
            column_count = metadata.column_count,
            column_names = ?metadata.column_names,
            upload_timestamp = %metadata.upload_timestamp,
            "Extracted metadata"
        );

        Ok(metadata)
    }
}
