//! The causal-relationship document model.
//!
//! A relationship is a directed `cause -> effect` edge owned by an agent.
//! Nodes are implicit: they exist only as ids inside relationships, and
//! the graph is reconstructed purely from edges.

mod descriptors;
mod evidence;
mod filter;
mod mechanism;
mod network;
mod profiles;
mod types;
mod validate;

pub use descriptors::{CauseContext, CauseDescriptor, EffectDescriptor, TimeWindow};
pub use evidence::{CausalEvidence, Correlation, EmpiricalItem, EmpiricalMethod};
pub use filter::RelationshipFilter;
pub use mechanism::{CausalMechanism, Moderator, ModeratorInfluence, Precondition};
pub use network::CausalNetwork;
pub use profiles::{
    InferenceProfile, LearningProfile, RelationshipMetadata, Revision, TemporalProfile,
};
pub use types::{CausalCategory, CausalRelationType};
pub use validate::{validate, validate_scores};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted cause -> effect record. The sole durable entity of the
/// store; field names and nesting are the contract with existing
/// document data, hence the camelCase wire shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CausalRelationship {
    /// Generated uuid v4. Empty on a draft; assigned by the store.
    #[serde(default)]
    pub id: String,
    pub agent_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    /// Caller-supplied observation time. Recency ordering keys off this.
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "type")]
    pub relation_type: CausalRelationType,
    pub category: CausalCategory,
    /// Causal strength of this edge, 0.0..=1.0.
    pub strength: f64,
    /// Confidence that the edge exists at all, 0.0..=1.0.
    pub confidence: f64,
    pub cause: CauseDescriptor,
    pub effect: EffectDescriptor,
    #[serde(default)]
    pub mechanism: CausalMechanism,
    #[serde(default)]
    pub evidence: CausalEvidence,
    #[serde(default)]
    pub network: CausalNetwork,
    #[serde(default)]
    pub temporal: TemporalProfile,
    #[serde(default)]
    pub inference: InferenceProfile,
    #[serde(default)]
    pub learning: LearningProfile,
    #[serde(default)]
    pub metadata: RelationshipMetadata,
    /// Generated when the record is first stored.
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    /// Touched on every revision.
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl CausalRelationship {
    /// Whether this edge points back at its own cause.
    pub fn is_self_loop(&self) -> bool {
        self.cause.id == self.effect.id
    }

    /// Structural comparison of the caller-supplied payload, ignoring the
    /// generated id and timestamps. For identity comparison use `==`.
    pub fn payload_eq(&self, other: &Self) -> bool {
        self.agent_id == other.agent_id
            && self.session_id == other.session_id
            && self.timestamp == other.timestamp
            && self.relation_type == other.relation_type
            && self.category == other.category
            && self.strength == other.strength
            && self.confidence == other.confidence
            && self.cause == other.cause
            && self.effect == other.effect
            && self.mechanism == other.mechanism
            && self.evidence == other.evidence
            && self.network == other.network
            && self.temporal == other.temporal
            && self.inference == other.inference
            && self.learning == other.learning
            && self.metadata == other.metadata
    }
}

/// Identity equality: two relationships are equal if they share an id.
/// For structural comparison of the caller-supplied fields, use
/// [`CausalRelationship::payload_eq`].
impl PartialEq for CausalRelationship {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}
