//! StorageEngine — owns the ConnectionPool, implements ICausalStore,
//! startup pragma configuration and migrations.

use std::path::Path;

use chrono::Utc;
use uuid::Uuid;

use aition_core::errors::AitionResult;
use aition_core::relationship::{
    validate, validate_scores, CausalRelationship, RelationshipFilter,
};
use aition_core::traits::ICausalStore;

use crate::migrations;
use crate::pool::ConnectionPool;

/// The main storage engine. Owns the connection pool and provides the
/// full ICausalStore interface over one SQLite database.
pub struct StorageEngine {
    pool: ConnectionPool,
    /// When true, use the read pool for read operations (file-backed
    /// mode). When false, route all reads through the writer (in-memory
    /// mode, because in-memory read pool connections are isolated
    /// databases).
    use_read_pool: bool,
}

impl StorageEngine {
    /// Open a storage engine backed by a file on disk.
    pub fn open(path: &Path) -> AitionResult<Self> {
        Self::open_with_pool_size(path, aition_core::constants::DEFAULT_READ_POOL_SIZE)
    }

    /// Open with an explicit read pool size.
    pub fn open_with_pool_size(path: &Path, read_pool_size: usize) -> AitionResult<Self> {
        let pool = ConnectionPool::open(path, read_pool_size)?;
        let engine = Self {
            pool,
            use_read_pool: true,
        };
        engine.initialize()?;
        Ok(engine)
    }

    /// Open from configuration: file-backed when a path is set,
    /// in-memory otherwise.
    pub fn from_config(config: &aition_core::config::StorageConfig) -> AitionResult<Self> {
        match &config.path {
            Some(path) => Self::open_with_pool_size(path, config.read_pool_size),
            None => Self::open_in_memory(),
        }
    }

    /// Open an in-memory storage engine (for testing). Routes all reads
    /// through the writer since in-memory read pool connections are
    /// isolated databases that can't see the writer's changes.
    pub fn open_in_memory() -> AitionResult<Self> {
        let pool = ConnectionPool::open_in_memory(1)?;
        let engine = Self {
            pool,
            use_read_pool: false,
        };
        engine.initialize()?;
        Ok(engine)
    }

    /// Run migrations.
    fn initialize(&self) -> AitionResult<()> {
        self.pool.writer.with_conn_sync(|conn| {
            migrations::run_migrations(conn)?;
            Ok(())
        })?;
        tracing::debug!(
            schema = migrations::latest_version(),
            "storage engine ready"
        );
        Ok(())
    }

    /// Get a reference to the connection pool (for advanced operations).
    pub fn pool(&self) -> &ConnectionPool {
        &self.pool
    }

    /// Execute a read-only query on the best available connection.
    fn with_reader<F, T>(&self, f: F) -> AitionResult<T>
    where
        F: FnOnce(&rusqlite::Connection) -> AitionResult<T>,
    {
        if self.use_read_pool {
            self.pool.readers.with_conn(f)
        } else {
            self.pool.writer.with_conn_sync(f)
        }
    }
}

impl ICausalStore for StorageEngine {
    fn store(&self, relationship: CausalRelationship) -> AitionResult<String> {
        validate(&relationship)?;

        let mut record = relationship;
        let now = Utc::now();
        record.id = Uuid::new_v4().to_string();
        record.created_at = now;
        record.updated_at = now;

        let id = record.id.clone();
        self.pool
            .writer
            .with_conn_sync(|conn| crate::queries::relationship_crud::insert_relationship(conn, &record))?;
        Ok(id)
    }

    fn get(&self, id: &str) -> AitionResult<Option<CausalRelationship>> {
        self.with_reader(|conn| crate::queries::relationship_crud::get_relationship(conn, id))
    }

    fn query_by_agent(
        &self,
        agent_id: &str,
        filter: &RelationshipFilter,
    ) -> AitionResult<Vec<CausalRelationship>> {
        self.with_reader(|conn| {
            crate::queries::relationship_query::query_by_agent(conn, agent_id, filter)
        })
    }

    fn find_by_cause(&self, cause_id: &str) -> AitionResult<Vec<CausalRelationship>> {
        self.with_reader(|conn| crate::queries::relationship_query::find_by_cause(conn, cause_id))
    }

    fn find_by_effect(&self, effect_id: &str) -> AitionResult<Vec<CausalRelationship>> {
        self.with_reader(|conn| crate::queries::relationship_query::find_by_effect(conn, effect_id))
    }

    fn revise_strength(&self, id: &str, strength: f64, confidence: f64) -> AitionResult<()> {
        validate_scores(strength, confidence)?;
        self.pool.writer.with_conn_sync(|conn| {
            crate::queries::relationship_crud::revise_strength(conn, id, strength, confidence)
        })
    }

    fn count_by_agent(&self, agent_id: &str) -> AitionResult<usize> {
        self.with_reader(|conn| crate::queries::relationship_crud::count_by_agent(conn, agent_id))
    }
}
