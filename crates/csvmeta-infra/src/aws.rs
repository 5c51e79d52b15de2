//! Shared AWS client configuration.
//!
//! One [`SdkConfig`] is loaded per process and handed to every client, so the
//! S3, DynamoDB and SNS clients agree on region, endpoint and credentials.

use aws_config::{BehaviorVersion, Region, SdkConfig};
use aws_credential_types::provider::error::CredentialsError;
use csvmeta_core::Config;
use std::error::Error as StdError;

/// Service error codes that mean the caller's credentials were rejected.
const CREDENTIAL_ERROR_CODES: &[&str] = &[
    "InvalidAccessKeyId",
    "SignatureDoesNotMatch",
    "ExpiredToken",
    "ExpiredTokenException",
    "InvalidClientTokenId",
    "UnrecognizedClientException",
    "MissingAuthenticationToken",
    "InvalidSignatureException",
];

/// Load the SDK configuration for all clients.
pub async fn load_sdk_config(config: &Config) -> SdkConfig {
    let mut loader = aws_config::defaults(BehaviorVersion::latest())
        .region(Region::new(config.aws_region.clone()));

    if let Some(ref endpoint) = config.endpoint_url {
        loader = loader.endpoint_url(endpoint.clone());
    }

    let sdk_config = loader.load().await;

    tracing::debug!(
        region = %config.aws_region,
        endpoint = config.endpoint_url.as_deref().unwrap_or("aws"),
        has_credentials = sdk_config.credentials_provider().is_some(),
        "AWS SDK configuration loaded"
    );

    sdk_config
}

/// Whether a service error code reports rejected credentials.
pub fn is_credentials_code(code: Option<&str>) -> bool {
    code.is_some_and(|code| CREDENTIAL_ERROR_CODES.contains(&code))
}

/// Whether an SDK failure was caused by missing or unloadable credentials.
///
/// The credentials provider error is buried in the error's source chain when
/// request signing could not obtain an identity.
pub fn is_credentials_failure(err: &(dyn StdError + 'static)) -> bool {
    let mut current: Option<&(dyn StdError + 'static)> = Some(err);
    while let Some(e) = current {
        if e.downcast_ref::<CredentialsError>().is_some() {
            return true;
        }
        current = e.source();
    }
    false
}
