//! Wiring shared by the `csvmeta` commands.

use anyhow::Context;
use chrono::Utc;
use csvmeta_core::{Config, FileMetadata};
use csvmeta_db::{DynamoMetadataRepository, InMemoryMetadataRepository, MetadataRepository};
use csvmeta_infra::{load_sdk_config, LogNotifier, NotificationDispatcher, Notifier, SnsNotifier};
use csvmeta_processing::{CsvScanner, EventHandler, MetadataExtractor};
use csvmeta_storage::create_storage;
use std::path::Path;
use std::sync::Arc;

/// Build the handler and its clients once for this process.
///
/// With `dry_run`, metadata is kept in memory and notifications go to the log;
/// object storage is still read through the configured backend.
pub async fn build_handler(
    config: &Config,
    scanner: CsvScanner,
    dry_run: bool,
) -> anyhow::Result<EventHandler> {
    let sdk_config = load_sdk_config(config).await;

    let storage = create_storage(config, &sdk_config)
        .await
        .context("Failed to initialize object storage")?;

    let (repository, notifier): (Arc<dyn MetadataRepository>, Arc<dyn Notifier>) = if dry_run {
        (
            Arc::new(InMemoryMetadataRepository::new()),
            Arc::new(LogNotifier::new(config.sns_topic_arn.clone())),
        )
    } else {
        (
            Arc::new(DynamoMetadataRepository::new(
                &sdk_config,
                config.dynamo_table.clone(),
            )),
            Arc::new(SnsNotifier::new(&sdk_config, config.sns_topic_arn.clone())),
        )
    };

    tracing::info!(
        storage = %storage.backend_type(),
        table = %config.dynamo_table,
        topic_arn = %config.sns_topic_arn,
        dry_run,
        "Pipeline initialized"
    );

    Ok(EventHandler::new(
        MetadataExtractor::new(storage).with_scanner(scanner),
        repository,
        NotificationDispatcher::new(notifier),
    ))
}

/// Parse a single-character delimiter argument.
pub fn parse_delimiter(value: &str) -> Result<u8, String> {
    let value = if value == "\\t" { "\t" } else { value };
    match value.as_bytes() {
        [byte] if byte.is_ascii() => Ok(*byte),
        _ => Err(format!(
            "delimiter must be a single ASCII character, got '{}'",
            value
        )),
    }
}

/// Metadata for a file on local disk, without storing or announcing it.
pub async fn inspect_file(path: &Path, scanner: CsvScanner) -> anyhow::Result<FileMetadata> {
    let data = tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let text = std::str::from_utf8(&data)
        .with_context(|| format!("{} is not valid UTF-8", path.display()))?;
    let shape = scanner
        .scan(text)
        .with_context(|| format!("Failed to parse {} as CSV", path.display()))?;

    let filename = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    Ok(FileMetadata::new(
        filename,
        Utc::now(),
        data.len() as u64,
        shape.row_count,
        shape.column_names,
    ))
}
