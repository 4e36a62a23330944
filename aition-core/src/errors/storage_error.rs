/// Storage-layer errors for SQLite operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("SQLite error: {message}")]
    SqliteError { message: String },

    #[error("migration failed at version {version}: {reason}")]
    MigrationFailed { version: u32, reason: String },

    #[error("no relationship with id {id}")]
    UnknownRelationship { id: String },

    #[error("connection pool lock poisoned: {details}")]
    PoolPoisoned { details: String },
}
