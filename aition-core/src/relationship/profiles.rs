//! Auxiliary bookkeeping carried on every relationship document. These
//! blocks are written and read by other subsystems (decay, learning,
//! quality review); the store persists them verbatim and the graph layer
//! ignores them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Observation timing bookkeeping.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TemporalProfile {
    pub first_observed: Option<DateTime<Utc>>,
    pub last_observed: Option<DateTime<Utc>>,
    pub observation_count: u64,
}

/// Uncertainty decomposition recorded by whichever process proposed the
/// relationship.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InferenceProfile {
    /// How the relationship was proposed ("observed", "llm", "imported", ...).
    pub method: Option<String>,
    /// Irreducible randomness in the phenomenon, 0.0..=1.0.
    pub aleatoric_uncertainty: f64,
    /// Uncertainty from missing knowledge, 0.0..=1.0.
    pub epistemic_uncertainty: f64,
}

/// Update history for strength/confidence revisions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LearningProfile {
    pub revision_count: u64,
    pub last_revised: Option<DateTime<Utc>>,
    pub revisions: Vec<Revision>,
}

/// One entry in the revision history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Revision {
    pub timestamp: DateTime<Utc>,
    pub strength: f64,
    pub confidence: f64,
}

/// Quality scores and free-form tags.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RelationshipMetadata {
    /// Reviewer- or pipeline-assigned quality score, 0.0..=1.0.
    pub quality: f64,
    /// Where the record came from ("conversation", "sensor", ...).
    pub source: Option<String>,
    pub tags: Vec<String>,
}
