use crate::errors::AitionResult;
use crate::relationship::{CausalRelationship, RelationshipFilter};

/// The storage collaborator boundary: one document collection of causal
/// relationships, with the expansion primitives the graph layer needs.
///
/// Implementations must be safe under concurrent `store` calls; every
/// call persists one independent record. All read methods are safe to
/// run in parallel with writes to other records.
pub trait ICausalStore: Send + Sync {
    /// Validate and persist a draft, assigning a fresh id and the
    /// created/updated timestamps. Returns the generated id.
    fn store(&self, relationship: CausalRelationship) -> AitionResult<String>;

    /// Point lookup by generated id.
    fn get(&self, id: &str) -> AitionResult<Option<CausalRelationship>>;

    /// All relationships owned by an agent that pass the filter, most
    /// recent first. No implicit limit.
    fn query_by_agent(
        &self,
        agent_id: &str,
        filter: &RelationshipFilter,
    ) -> AitionResult<Vec<CausalRelationship>>;

    /// Relationships whose cause node is `cause_id`. Forward-expansion
    /// primitive: one logical query.
    fn find_by_cause(&self, cause_id: &str) -> AitionResult<Vec<CausalRelationship>>;

    /// Relationships whose effect node is `effect_id`. Backward-expansion
    /// primitive: one logical query.
    fn find_by_effect(&self, effect_id: &str) -> AitionResult<Vec<CausalRelationship>>;

    /// Learning update: revise strength/confidence in place, appending to
    /// the revision history. Identity and cause/effect ids are immutable.
    fn revise_strength(&self, id: &str, strength: f64, confidence: f64) -> AitionResult<()>;

    /// Number of relationships owned by an agent.
    fn count_by_agent(&self, agent_id: &str) -> AitionResult<usize>;
}
