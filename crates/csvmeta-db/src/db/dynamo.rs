use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_dynamodb::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_dynamodb::operation::put_item::PutItemError;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client as DynamoClient;
use csvmeta_core::FileMetadata;
use csvmeta_infra::{is_credentials_code, is_credentials_failure};
use std::collections::HashMap;

use super::repository::{MetadataRepository, RepositoryError, RepositoryResult};

/// Metadata table in DynamoDB, partition key `filename`.
#[derive(Clone)]
pub struct DynamoMetadataRepository {
    client: DynamoClient,
    table: String,
}

impl DynamoMetadataRepository {
    pub fn new(sdk_config: &SdkConfig, table: impl Into<String>) -> Self {
        Self::from_client(DynamoClient::new(sdk_config), table)
    }

    pub fn from_client(client: DynamoClient, table: impl Into<String>) -> Self {
        Self {
            client,
            table: table.into(),
        }
    }

    pub fn table(&self) -> &str {
        &self.table
    }
}

/// Attribute layout of a stored record.
pub(crate) fn metadata_to_item(metadata: &FileMetadata) -> HashMap<String, AttributeValue> {
    let column_names = metadata
        .column_names
        .iter()
        .map(|name| AttributeValue::S(name.clone()))
        .collect();

    HashMap::from([
        (
            "filename".to_string(),
            AttributeValue::S(metadata.filename.clone()),
        ),
        (
            "upload_timestamp".to_string(),
            AttributeValue::S(metadata.upload_timestamp.clone()),
        ),
        (
            "file_size_bytes".to_string(),
            AttributeValue::N(metadata.file_size_bytes.to_string()),
        ),
        (
            "row_count".to_string(),
            AttributeValue::N(metadata.row_count.to_string()),
        ),
        (
            "column_count".to_string(),
            AttributeValue::N(metadata.column_count.to_string()),
        ),
        ("column_names".to_string(), AttributeValue::L(column_names)),
    ])
}

fn classify_put_error<R>(table: &str, err: &SdkError<PutItemError, R>) -> RepositoryError
where
    R: std::fmt::Debug + Send + Sync + 'static,
{
    let detail = DisplayErrorContext(err).to_string();

    if is_credentials_code(err.code()) || is_credentials_failure(err) {
        return RepositoryError::Credentials(detail);
    }
    match err.as_service_error() {
        Some(e) if e.is_resource_not_found_exception() => {
            RepositoryError::TableNotFound(table.to_string())
        }
        Some(e)
            if e.is_provisioned_throughput_exceeded_exception()
                || e.is_request_limit_exceeded() =>
        {
            RepositoryError::Throttled(detail)
        }
        _ => RepositoryError::PutFailed(detail),
    }
}

#[async_trait]
impl MetadataRepository for DynamoMetadataRepository {
    async fn store(&self, metadata: &FileMetadata) -> RepositoryResult<()> {
        let start = std::time::Instant::now();

        self.client
            .put_item()
            .table_name(&self.table)
            .set_item(Some(metadata_to_item(metadata)))
            .send()
            .await
            .map_err(|e| {
                let err = classify_put_error(&self.table, &e);

                tracing::error!(
                    error = %err,
                    table = %self.table,
                    filename = %metadata.filename,
                    duration_ms = start.elapsed().as_secs_f64() * 1000.0,
                    "DynamoDB put_item failed"
                );
                err
            })?;

        tracing::info!(
            table = %self.table,
            filename = %metadata.filename,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Metadata successfully stored"
        );

        Ok(())
    }
}
