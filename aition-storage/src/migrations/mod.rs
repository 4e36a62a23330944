//! Versioned schema migrations, recorded in `schema_version`.

mod v001_relationship_tables;

use rusqlite::{params, Connection};

use aition_core::errors::{AitionError, AitionResult, StorageError};

use crate::to_storage_err;

type Migration = (u32, fn(&Connection) -> AitionResult<()>);

const MIGRATIONS: &[Migration] = &[(1, v001_relationship_tables::migrate)];

/// Apply every migration newer than the recorded schema version.
pub fn run_migrations(conn: &Connection) -> AitionResult<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS schema_version (
            version    INTEGER PRIMARY KEY,
            applied_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
        )",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;

    let current: u32 = conn
        .query_row(
            "SELECT COALESCE(MAX(version), 0) FROM schema_version",
            [],
            |row| row.get(0),
        )
        .map_err(|e| to_storage_err(e.to_string()))?;

    for (version, migrate) in MIGRATIONS {
        if *version > current {
            tracing::info!("applying schema migration v{version:03}");
            migrate(conn).map_err(|e| {
                AitionError::Storage(StorageError::MigrationFailed {
                    version: *version,
                    reason: e.to_string(),
                })
            })?;
            conn.execute(
                "INSERT INTO schema_version (version) VALUES (?1)",
                params![version],
            )
            .map_err(|e| to_storage_err(e.to_string()))?;
        }
    }
    Ok(())
}

/// The schema version this build expects.
pub fn latest_version() -> u32 {
    MIGRATIONS.last().map(|(v, _)| *v).unwrap_or(0)
}
