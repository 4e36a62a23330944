//! The single write connection. SQLite permits one writer at a time;
//! every mutation in the workspace is serialized through this mutex, so
//! concurrent `store` calls from multiple agents are safe.

use std::path::Path;
use std::sync::Mutex;

use rusqlite::Connection;

use aition_core::errors::{AitionError, AitionResult, StorageError};

use super::pragmas::apply_pragmas;
use crate::to_storage_err;

/// Mutex-guarded write connection.
pub struct WriteConnection {
    conn: Mutex<Connection>,
}

impl WriteConnection {
    /// Open the write connection for the given database file.
    pub fn open(path: &Path) -> AitionResult<Self> {
        let conn = Connection::open(path).map_err(|e| to_storage_err(e.to_string()))?;
        apply_pragmas(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Open an in-memory write connection (for testing).
    pub fn open_in_memory() -> AitionResult<Self> {
        let conn = Connection::open_in_memory().map_err(|e| to_storage_err(e.to_string()))?;
        apply_pragmas(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Execute a closure with exclusive access to the write connection.
    pub fn with_conn_sync<F, T>(&self, f: F) -> AitionResult<T>
    where
        F: FnOnce(&Connection) -> AitionResult<T>,
    {
        let guard = self.conn.lock().map_err(|e| {
            AitionError::Storage(StorageError::PoolPoisoned {
                details: e.to_string(),
            })
        })?;
        f(&guard)
    }
}
