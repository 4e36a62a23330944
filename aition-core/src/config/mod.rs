//! Workspace configuration, loaded from TOML.

mod storage_config;
mod traversal_config;

pub use storage_config::StorageConfig;
pub use traversal_config::TraversalConfig;

use serde::{Deserialize, Serialize};

use crate::errors::{AitionError, AitionResult};

/// Top-level configuration. Every field has a default, so an empty file
/// (or no file at all) yields a working setup.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AitionConfig {
    pub storage: StorageConfig,
    pub traversal: TraversalConfig,
}

impl AitionConfig {
    /// Parse a TOML document.
    pub fn from_toml_str(raw: &str) -> AitionResult<Self> {
        toml::from_str(raw).map_err(|e| AitionError::Serialization {
            message: format!("config parse: {e}"),
        })
    }

    /// Load from a file on disk.
    pub fn load(path: &std::path::Path) -> AitionResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| AitionError::Serialization {
            message: format!("config read {}: {e}", path.display()),
        })?;
        Self::from_toml_str(&raw)
    }
}
