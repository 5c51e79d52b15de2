//! csvmeta metadata persistence
//!
//! One record per processed file, keyed by filename. Writes replace the whole
//! record (last write wins); nothing in the pipeline reads records back.

pub mod db;

pub use db::{InMemoryMetadataRepository, MetadataRepository, RepositoryError, RepositoryResult};
#[cfg(feature = "dynamodb")]
pub use db::DynamoMetadataRepository;
