//! csvmeta Core Library
//!
//! This crate provides the domain model, the inbound event shape, configuration
//! and error reporting metadata shared by every csvmeta component.

pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod storage_types;

// Re-export commonly used types
pub use config::Config;
pub use error::{ErrorMetadata, LogLevel};
pub use models::{FileMetadata, ObjectRef, S3Event};
pub use storage_types::StorageBackend;
