//! csvmeta Storage Library
//!
//! Read access to the object store that receives incoming CSV files. The
//! [`Storage`] trait has an S3 implementation and a local filesystem
//! implementation that lays objects out as `{root}/{bucket}/{key}`.
//!
//! Bucket names and keys must not contain `..` or start with `/`; see the
//! `keys` module.

pub mod factory;
pub(crate) mod keys;
#[cfg(feature = "storage-local")]
pub mod local;
#[cfg(feature = "storage-s3")]
pub mod s3;
pub mod traits;

// Re-export commonly used types
pub use csvmeta_core::StorageBackend;
pub use factory::create_storage;
#[cfg(feature = "storage-local")]
pub use local::LocalStorage;
#[cfg(feature = "storage-s3")]
pub use s3::S3Storage;
pub use traits::{Storage, StorageError, StorageResult, StoredObject};
