//! Resource-specific error types.

use thiserror::Error;

use crate::store::StoreError;

/// Errors that can occur during resource operations.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The requested resource was not found.
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// A resource with this URI is already registered.
    #[error("Resource already registered: {0}")]
    DuplicateUri(String),

    /// The backing store could not be read.
    #[error(transparent)]
    Retrieval(#[from] StoreError),

    /// The content could not be encoded.
    #[error("failed to marshal resource content: {0}")]
    Serialization(#[from] serde_json::Error),

    /// An internal error occurred.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ResourceError {
    /// Create a new "not found" error.
    pub fn not_found(uri: impl Into<String>) -> Self {
        Self::NotFound(uri.into())
    }

    /// Create a new "internal" error.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}
