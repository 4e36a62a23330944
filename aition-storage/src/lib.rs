//! # aition-storage
//!
//! SQLite persistence for causal-relationship documents. The full record
//! is stored as one JSON document per row, with the fields the query and
//! traversal paths touch projected into indexed columns.

pub mod engine;
pub mod migrations;
pub mod pool;
pub mod queries;

pub use engine::StorageEngine;

use aition_core::errors::{AitionError, StorageError};

/// Map a low-level SQLite failure into the workspace error type.
pub(crate) fn to_storage_err(message: String) -> AitionError {
    AitionError::Storage(StorageError::SqliteError { message })
}
