//! Completion notifications
//!
//! [`Notifier`] is the publishing seam; [`NotificationDispatcher`] wraps it with
//! the best-effort policy the pipeline relies on.

mod dispatcher;
mod log;
#[cfg(feature = "notification-sns")]
mod sns;

pub use dispatcher::NotificationDispatcher;
pub use log::LogNotifier;
#[cfg(feature = "notification-sns")]
pub use sns::SnsNotifier;

use async_trait::async_trait;
use thiserror::Error;

/// Notification errors
#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("Failed to serialize notification: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Publish credentials rejected: {0}")]
    Credentials(String),

    #[error("Topic not found: {0}")]
    TopicNotFound(String),

    #[error("Publish failed: {0}")]
    PublishFailed(String),
}

pub type NotifyResult<T> = Result<T, NotifyError>;

/// A pub/sub topic the pipeline can announce completed files on.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Publish one message to the topic.
    async fn publish(&self, subject: &str, message: &str) -> NotifyResult<()>;

    /// Identifier of the destination topic, for logging.
    fn topic(&self) -> &str;
}
