//! Pipeline failure kinds and how each one is reported.

use csvmeta_core::constants::{CREDENTIALS_MISSING_MESSAGE, INVALID_EVENT_MESSAGE};
use csvmeta_core::models::EventError;
use csvmeta_core::{ErrorMetadata, LogLevel};
use csvmeta_db::RepositoryError;
use csvmeta_storage::StorageError;
use thiserror::Error;

use crate::csv_scan::ScanError;

/// Failure to turn an object into metadata.
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error(transparent)]
    Access(#[from] StorageError),

    #[error("Failed to decode {key} as UTF-8: {source}")]
    Decode {
        key: String,
        #[source]
        source: std::str::Utf8Error,
    },

    #[error("Failed to parse {key} as CSV: {source}")]
    Parse {
        key: String,
        #[source]
        source: ScanError,
    },
}

impl ExtractionError {
    pub fn is_credentials(&self) -> bool {
        matches!(self, ExtractionError::Access(e) if e.is_credentials())
    }
}

/// Terminal failure of one invocation.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Invalid event format")]
    BadEvent(#[source] EventError),

    /// Credentials missing or rejected by any backend. Carries the backend's
    /// description for the logs only.
    #[error("AWS credentials missing")]
    AuthFailure(String),

    #[error(transparent)]
    Extraction(ExtractionError),

    #[error(transparent)]
    Persistence(RepositoryError),

    #[error("Failed to serialize metadata: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<EventError> for PipelineError {
    fn from(err: EventError) -> Self {
        PipelineError::BadEvent(err)
    }
}

impl From<ExtractionError> for PipelineError {
    fn from(err: ExtractionError) -> Self {
        if err.is_credentials() {
            PipelineError::AuthFailure(err.to_string())
        } else {
            PipelineError::Extraction(err)
        }
    }
}

impl From<RepositoryError> for PipelineError {
    fn from(err: RepositoryError) -> Self {
        if err.is_credentials() {
            PipelineError::AuthFailure(err.to_string())
        } else {
            PipelineError::Persistence(err)
        }
    }
}

impl ErrorMetadata for PipelineError {
    fn http_status_code(&self) -> u16 {
        match self {
            PipelineError::BadEvent(_) => 400,
            _ => 500,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            PipelineError::BadEvent(_) => "BAD_EVENT",
            PipelineError::AuthFailure(_) => "AUTH_FAILURE",
            PipelineError::Extraction(_) => "EXTRACTION_FAILED",
            PipelineError::Persistence(_) => "PERSISTENCE_FAILED",
            PipelineError::Serialization(_) => "SERIALIZATION_FAILED",
        }
    }

    fn client_message(&self) -> String {
        match self {
            PipelineError::BadEvent(_) => INVALID_EVENT_MESSAGE.to_string(),
            PipelineError::AuthFailure(_) => CREDENTIALS_MISSING_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }

    fn log_level(&self) -> LogLevel {
        match self {
            PipelineError::BadEvent(_) => LogLevel::Debug,
            PipelineError::Extraction(ExtractionError::Decode { .. })
            | PipelineError::Extraction(ExtractionError::Parse { .. }) => LogLevel::Warn,
            _ => LogLevel::Error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bad_event_metadata() {
        let err = PipelineError::from(EventError::NoRecords);
        assert_eq!(err.http_status_code(), 400);
        assert_eq!(err.error_code(), "BAD_EVENT");
        assert_eq!(err.client_message(), "Invalid event format");
        assert_eq!(err.log_level(), LogLevel::Debug);
    }

    #[test]
    fn test_storage_credentials_become_auth_failure() {
        let err = PipelineError::from(ExtractionError::Access(StorageError::Credentials(
            "no providers in chain provided credentials".to_string(),
        )));
        assert!(matches!(err, PipelineError::AuthFailure(_)));
        assert_eq!(err.http_status_code(), 500);
        assert_eq!(err.client_message(), "AWS credentials missing");
    }

    #[test]
    fn test_repository_credentials_become_auth_failure() {
        let err = PipelineError::from(RepositoryError::Credentials("expired".to_string()));
        assert_eq!(err.error_code(), "AUTH_FAILURE");
        assert_eq!(err.client_message(), "AWS credentials missing");
    }

    #[test]
    fn test_other_failures_surface_their_text() {
        let err = PipelineError::from(ExtractionError::Access(StorageError::NotFound(
            "csv-bucket/missing.csv".to_string(),
        )));
        assert_eq!(err.http_status_code(), 500);
        assert_eq!(err.error_code(), "EXTRACTION_FAILED");
        assert_eq!(err.client_message(), "File not found: csv-bucket/missing.csv");

        let err = PipelineError::from(ExtractionError::Parse {
            key: "empty.csv".to_string(),
            source: ScanError::NoColumns,
        });
        assert_eq!(
            err.client_message(),
            "Failed to parse empty.csv as CSV: No columns to parse from file"
        );
        assert_eq!(err.log_level(), LogLevel::Warn);

        let err = PipelineError::from(RepositoryError::TableNotFound("CSVMetadata".to_string()));
        assert_eq!(err.error_code(), "PERSISTENCE_FAILED");
        assert_eq!(err.client_message(), "Metadata table not found: CSVMetadata");
        assert_eq!(err.log_level(), LogLevel::Error);
    }
}
