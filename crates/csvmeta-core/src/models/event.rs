//! Inbound object-created notification.
//!
//! Only the fields the pipeline reads are modelled; everything else in the
//! notification document is ignored during deserialization.

use serde::{Deserialize, Serialize};

/// Storage event envelope (`{"Records": [...]}`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct S3Event {
    #[serde(rename = "Records")]
    pub records: Vec<S3EventRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct S3EventRecord {
    pub s3: S3Entity,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct S3Entity {
    pub bucket: S3Bucket,
    pub object: S3Object,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct S3Bucket {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct S3Object {
    pub key: String,
}

/// The object an invocation is asked to process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectRef {
    pub bucket: String,
    pub key: String,
}

#[derive(Debug, thiserror::Error)]
pub enum EventError {
    #[error("Malformed event: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Event contains no records")]
    NoRecords,
}

impl S3Event {
    /// Build a single-record event for `bucket`/`key`.
    pub fn for_object(bucket: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            records: vec![S3EventRecord {
                s3: S3Entity {
                    bucket: S3Bucket {
                        name: bucket.into(),
                    },
                    object: S3Object { key: key.into() },
                },
            }],
        }
    }

    /// Extract the target object from a raw event document.
    ///
    /// Only the first record is read; additional records are ignored.
    pub fn first_object(value: &serde_json::Value) -> Result<ObjectRef, EventError> {
        let event = S3Event::deserialize(value)?;
        let record = event.records.into_iter().next().ok_or(EventError::NoRecords)?;
        Ok(ObjectRef {
            bucket: record.s3.bucket.name,
            key: record.s3.object.key,
        })
    }
}
