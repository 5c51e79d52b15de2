//! Validation for bucket names and object keys used as filesystem paths.

use crate::traits::{StorageError, StorageResult};
use std::path::{Component, Path};

/// Reject path segments that could escape the storage root.
pub fn validate_path_segment(kind: &str, value: &str) -> StorageResult<()> {
    if value.is_empty() {
        return Err(StorageError::InvalidKey(format!("{} must not be empty", kind)));
    }
    let escapes_root = Path::new(value)
        .components()
        .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
    if escapes_root || value.starts_with('\\') || value.split('\\').any(|part| part == "..") {
        return Err(StorageError::InvalidKey(format!(
            "{} contains invalid characters: {}",
            kind, value
        )));
    }
    Ok(())
}
