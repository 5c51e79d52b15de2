//! Configuration module
//!
//! Endpoint and resource identifiers are resolved once at process start from
//! the environment. Every value has a fixed default pointing at a LocalStack
//! deployment, so an unconfigured process talks to `localhost:4566`.

use std::env;
use std::path::PathBuf;

use crate::constants::{
    DEFAULT_AWS_REGION, DEFAULT_DYNAMO_TABLE, DEFAULT_LOCALSTACK_ENDPOINT, DEFAULT_S3_BUCKET,
    DEFAULT_SNS_TOPIC_ARN,
};
use crate::storage_types::StorageBackend;

/// Pipeline configuration.
#[derive(Clone, Debug)]
pub struct Config {
    /// Endpoint override shared by the S3, DynamoDB and SNS clients.
    /// `None` means the regular AWS endpoints.
    pub endpoint_url: Option<String>,
    pub aws_region: String,
    /// Default bucket for commands that build their own event.
    pub s3_bucket: String,
    pub dynamo_table: String,
    pub sns_topic_arn: String,
    pub storage_backend: StorageBackend,
    pub local_storage_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint_url: Some(DEFAULT_LOCALSTACK_ENDPOINT.to_string()),
            aws_region: DEFAULT_AWS_REGION.to_string(),
            s3_bucket: DEFAULT_S3_BUCKET.to_string(),
            dynamo_table: DEFAULT_DYNAMO_TABLE.to_string(),
            sns_topic_arn: DEFAULT_SNS_TOPIC_ARN.to_string(),
            storage_backend: StorageBackend::S3,
            local_storage_path: None,
        }
    }
}

impl Config {
    /// Load configuration from the process environment (and `.env`, if present).
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, anyhow::Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        let endpoint_url = match lookup("LOCALSTACK_ENDPOINT") {
            Some(value) if value.trim().is_empty() => None,
            Some(value) => Some(value.trim().to_string()),
            None => defaults.endpoint_url,
        };

        let storage_backend = match lookup("STORAGE_BACKEND") {
            Some(value) => value.parse::<StorageBackend>()?,
            None => defaults.storage_backend,
        };

        Ok(Config {
            endpoint_url,
            aws_region: lookup("AWS_REGION")
                .or_else(|| lookup("AWS_DEFAULT_REGION"))
                .unwrap_or(defaults.aws_region),
            s3_bucket: lookup("S3_BUCKET").unwrap_or(defaults.s3_bucket),
            dynamo_table: lookup("DYNAMO_TABLE").unwrap_or(defaults.dynamo_table),
            sns_topic_arn: lookup("SNS_TOPIC_ARN").unwrap_or(defaults.sns_topic_arn),
            storage_backend,
            local_storage_path: lookup("LOCAL_STORAGE_PATH")
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
        })
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.dynamo_table.trim().is_empty() {
            return Err(anyhow::anyhow!("DYNAMO_TABLE must not be empty"));
        }

        if !self.sns_topic_arn.starts_with("arn:") {
            return Err(anyhow::anyhow!(
                "SNS_TOPIC_ARN must be a valid ARN (got '{}')",
                self.sns_topic_arn
            ));
        }

        if let Some(ref endpoint) = self.endpoint_url {
            if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
                return Err(anyhow::anyhow!(
                    "LOCALSTACK_ENDPOINT must be an http(s) URL (got '{}')",
                    endpoint
                ));
            }
        }

        if self.storage_backend == StorageBackend::Local && self.local_storage_path.is_none() {
            return Err(anyhow::anyhow!(
                "LOCAL_STORAGE_PATH must be set when using local storage backend"
            ));
        }

        Ok(())
    }
}
