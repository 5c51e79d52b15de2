use csvmeta_core::ErrorMetadata;
use serde::{Deserialize, Serialize};

/// Result of one invocation, in the shape the invoking runtime expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandlerResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: String,
}

impl HandlerResponse {
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status_code: 200,
            body: body.into(),
        }
    }

    pub fn from_error<E: ErrorMetadata>(err: &E) -> Self {
        Self {
            status_code: err.http_status_code(),
            body: err.client_message(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }
}
