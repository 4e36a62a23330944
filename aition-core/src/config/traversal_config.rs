use serde::{Deserialize, Serialize};

use crate::constants;

/// Traversal subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TraversalConfig {
    /// Depth bound applied when the caller does not pass one.
    pub default_max_depth: usize,
}

impl Default for TraversalConfig {
    fn default() -> Self {
        Self {
            default_max_depth: constants::DEFAULT_MAX_DEPTH,
        }
    }
}
