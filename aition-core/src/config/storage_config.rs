use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::constants;

/// Storage subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Database file path. `None` selects the in-memory engine.
    pub path: Option<PathBuf>,
    /// Number of read connections in the pool.
    pub read_pool_size: usize,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: None,
            read_pool_size: constants::DEFAULT_READ_POOL_SIZE,
        }
    }
}
