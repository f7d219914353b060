//! Typed errors for the import pipeline.
//!
//! Uses `thiserror` for library errors (not `anyhow`) to provide
//! strongly-typed, composable error handling.

use thiserror::Error;

/// Errors that can occur during import pipeline operations.
#[derive(Debug, Error)]
pub enum ImportError {
    /// Storage operation failed
    #[error("storage error: {0}")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Insert rejected because a tag with this name already exists.
    ///
    /// Raised by uniqueness-enforcing stores when a concurrent writer got
    /// the name in first; the tag merger recovers by re-resolving through
    /// a fresh lookup, so callers of the public API never see this.
    #[error("duplicate tag name: {name}")]
    DuplicateTag { name: String },

    /// Tag merge gave up after repeated duplicate-name rejections.
    #[error("tag merge exhausted retries for: {name}")]
    TagMergeExhausted { name: String },

    /// A job record with this id already exists
    #[error("duplicate job id: {id}")]
    DuplicateJob { id: String },
}

/// Result type alias for import pipeline operations.
pub type Result<T> = std::result::Result<T, ImportError>;
