//! csvmeta Infrastructure Library
//!
//! Process-level plumbing: AWS client configuration and error classification,
//! tracing initialisation, and the completion notification channel.

pub mod aws;
pub mod notification;
pub mod telemetry;

pub use aws::{is_credentials_code, is_credentials_failure, load_sdk_config};
pub use notification::{LogNotifier, NotificationDispatcher, Notifier, NotifyError, NotifyResult};
#[cfg(feature = "notification-sns")]
pub use notification::SnsNotifier;
pub use telemetry::init_tracing;
