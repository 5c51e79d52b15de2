pub mod event;
pub mod file_metadata;

pub use event::{EventError, ObjectRef, S3Bucket, S3Entity, S3Event, S3EventRecord, S3Object};
pub use file_metadata::FileMetadata;
