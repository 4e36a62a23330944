//! Error taxonomy. One enum per domain, wrapped by [`AitionError`].

mod storage_error;
mod traversal_error;
mod validation_error;

pub use storage_error::StorageError;
pub use traversal_error::TraversalError;
pub use validation_error::ValidationError;

/// Top-level error for the whole workspace.
#[derive(Debug, thiserror::Error)]
pub enum AitionError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("traversal rejected: {0}")]
    Traversal(#[from] TraversalError),

    #[error("storage failure: {0}")]
    Storage(#[from] StorageError),

    #[error("serialization failure: {message}")]
    Serialization { message: String },
}

impl From<serde_json::Error> for AitionError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            message: err.to_string(),
        }
    }
}

/// Result alias used across all crates.
pub type AitionResult<T> = Result<T, AitionError>;
