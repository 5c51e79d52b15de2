use std::sync::Arc;

use csvmeta_core::constants::NOTIFICATION_SUBJECT;
use csvmeta_core::FileMetadata;

use super::{Notifier, NotifyResult};

/// Publishes a completion message for each processed file.
///
/// Delivery is best-effort: failures are logged at `warn` and swallowed, so a
/// broken topic never fails an invocation whose metadata was already stored.
#[derive(Clone)]
pub struct NotificationDispatcher {
    notifier: Arc<dyn Notifier>,
}

impl NotificationDispatcher {
    pub fn new(notifier: Arc<dyn Notifier>) -> Self {
        Self { notifier }
    }

    pub async fn notify(&self, metadata: &FileMetadata) {
        match self.try_notify(metadata).await {
            Ok(()) => {
                tracing::info!(
                    filename = %metadata.filename,
                    topic = %self.notifier.topic(),
                    "Notification sent"
                );
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    filename = %metadata.filename,
                    topic = %self.notifier.topic(),
                    "Notification failed"
                );
            }
        }
    }

    async fn try_notify(&self, metadata: &FileMetadata) -> NotifyResult<()> {
        let message = metadata.to_pretty_json()?;
        self.notifier.publish(NOTIFICATION_SUBJECT, &message).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notification::NotifyError;
    use async_trait::async_trait;
    use chrono::Utc;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingNotifier {
        published: Mutex<Vec<(String, String)>>,
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
            "arn:aws:sns:us-east-1:000000000000:Test"
        }
    }

    struct FailingNotifier;

    #[async_trait]
    impl Notifier for FailingNotifier {
        async fn publish(&self, _subject: &str, _message: &str) -> NotifyResult<()> {
            Err(NotifyError::TopicNotFound("Test".to_string()))
        }

        fn topic(&self) -> &str {
            "arn:aws:sns:us-east-1:000000000000:Test"
        }
    }

    fn metadata() -> FileMetadata {
        FileMetadata::new(
            "orders.csv",
            Utc::now(),
            42,
            2,
            vec!["order_id".to_string(), "total".to_string()],
        )
    }

    #[tokio::test]
    async fn test_notify_publishes_pretty_metadata() {
        let notifier = Arc::new(RecordingNotifier::default());
        let dispatcher = NotificationDispatcher::new(notifier.clone());

        dispatcher.notify(&metadata()).await;

        let published = notifier.published.lock().unwrap();
        assert_eq!(published.len(), 1);
        let (subject, message) = &published[0];
        assert_eq!(subject, "CSV Processing Complete");
        assert!(message.contains("\n    \"row_count\": 2"));
        let parsed: FileMetadata = serde_json::from_str(message).unwrap();
        assert_eq!(parsed, metadata_with_timestamp(&parsed.upload_timestamp));
    }

    #[tokio::test]
    async fn test_notify_swallows_publish_failure() {
        let dispatcher = NotificationDispatcher::new(Arc::new(FailingNotifier));
        // Completes without panicking or returning an error.
        dispatcher.notify(&metadata()).await;
    }

    fn metadata_with_timestamp(timestamp: &str) -> FileMetadata {
        let mut expected = metadata();
        expected.upload_timestamp = timestamp.to_string();
        expected
    }
}
