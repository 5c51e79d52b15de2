use async_trait::async_trait;

use super::{Notifier, NotifyResult};

/// Writes notifications to the log instead of a topic. Used for dry runs.
#[derive(Debug, Clone)]
pub struct LogNotifier {
    topic: String,
}

impl LogNotifier {
    pub fn new(topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
        }
    }
}

#[async_trait]
impl Notifier for LogNotifier {
    async fn publish(&self, subject: &str, message: &str) -> NotifyResult<()> {
        tracing::info!(topic = %self.topic, subject = %subject, "{}", message);
        Ok(())
    }

    fn topic(&self) -> &str {
        &self.topic
    }
}
