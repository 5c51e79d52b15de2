use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_sns::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_sns::operation::publish::PublishError;
use aws_sdk_sns::Client as SnsClient;

use super::{Notifier, NotifyError, NotifyResult};
use crate::aws::{is_credentials_code, is_credentials_failure};

/// SNS topic publisher
#[derive(Clone)]
pub struct SnsNotifier {
    client: SnsClient,
    topic_arn: String,
}

impl SnsNotifier {
    pub fn new(sdk_config: &SdkConfig, topic_arn: impl Into<String>) -> Self {
        Self::from_client(SnsClient::new(sdk_config), topic_arn)
    }

    pub fn from_client(client: SnsClient, topic_arn: impl Into<String>) -> Self {
        Self {
            client,
            topic_arn: topic_arn.into(),
        }
    }
}

fn classify_publish_error<R>(topic_arn: &str, err: &SdkError<PublishError, R>) -> NotifyError
where
    R: std::fmt::Debug + Send + Sync + 'static,
{
    let detail = DisplayErrorContext(err).to_string();

    if is_credentials_code(err.code()) || is_credentials_failure(err) {
        NotifyError::Credentials(detail)
    } else if err.as_service_error().is_some_and(|e| e.is_not_found_exception()) {
        NotifyError::TopicNotFound(topic_arn.to_string())
    } else {
        NotifyError::PublishFailed(detail)
    }
}

#[async_trait]
impl Notifier for SnsNotifier {
    async fn publish(&self, subject: &str, message: &str) -> NotifyResult<()> {
        let start = std::time::Instant::now();

        let output = self
            .client
            .publish()
            .topic_arn(&self.topic_arn)
            .subject(subject)
            .message(message)
            .send()
            .await
            .map_err(|e| classify_publish_error(&self.topic_arn, &e))?;

        tracing::debug!(
            topic_arn = %self.topic_arn,
            message_id = output.message_id().unwrap_or_default(),
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "SNS publish successful"
        );

        Ok(())
    }

    fn topic(&self) -> &str {
        &self.topic_arn
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_sns::error::ErrorMetadata;
    use aws_sdk_sns::types::error::NotFoundException;

    const TOPIC: &str = "arn:aws:sns:us-east-1:000000000000:CSVProcessingTopic";

    fn coded(code: &str) -> SdkError<PublishError, ()> {
        let meta = ErrorMetadata::builder().code(code).message("rejected").build();
        SdkError::service_error(PublishError::generic(meta), ())
    }

    #[test]
    fn test_missing_topic_is_topic_not_found() {
        let err = SdkError::service_error(
            PublishError::NotFoundException(
                NotFoundException::builder().message("Topic does not exist").build(),
            ),
            (),
        );
        assert!(matches!(
            classify_publish_error(TOPIC, &err),
            NotifyError::TopicNotFound(ref arn) if arn == TOPIC
        ));
    }

    #[test]
    fn test_invalid_token_is_credentials() {
        assert!(matches!(
            classify_publish_error(TOPIC, &coded("InvalidClientTokenId")),
            NotifyError::Credentials(_)
        ));
    }

    #[test]
    fn test_other_codes_are_publish_failures() {
        assert!(matches!(
            classify_publish_error(TOPIC, &coded("AuthorizationError")),
            NotifyError::PublishFailed(_)
        ));
    }
}
