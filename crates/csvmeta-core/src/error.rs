//! Error reporting metadata
//!
//! Pipeline failures are plain `Result` values. Each failure kind describes how
//! it is reported through [`ErrorMetadata`], so the handler turns any error
//! into a response with a single lookup instead of matching on every variant.

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level - for expected errors like malformed input
    Debug,
    /// Warning level - for input files that cannot be read as CSV
    Warn,
    /// Error level - for unexpected failures
    Error,
}

/// Metadata for error responses - defines how an error should be presented
pub trait ErrorMetadata {
    /// HTTP-equivalent status code of the invocation response
    fn http_status_code(&self) -> u16;

    /// Machine-readable error code (e.g., "BAD_EVENT")
    fn error_code(&self) -> &'static str;

    /// Response body. Never contains stack traces or internal identifiers.
    fn client_message(&self) -> String;

    /// Log level for this error
    fn log_level(&self) -> LogLevel;
}
