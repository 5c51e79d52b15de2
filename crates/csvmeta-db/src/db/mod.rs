//! Metadata repositories
//!
//! [`MetadataRepository`] is the persistence seam. `DynamoMetadataRepository`
//! writes to the DynamoDB table; [`InMemoryMetadataRepository`] keeps records
//! in process for tests and dry runs.

#[cfg(feature = "dynamodb")]
mod dynamo;
mod memory;
mod repository;

#[cfg(feature = "dynamodb")]
pub use dynamo::DynamoMetadataRepository;
pub use memory::InMemoryMetadataRepository;
pub use repository::{MetadataRepository, RepositoryError, RepositoryResult};
