//! Read-only aggregate summaries over one agent's relationship set.
//!
//! Every fold reports one entry per relationship (no cross-relationship
//! merge by node id); callers wanting true per-id aggregates post-process.

mod folds;

use serde::{Deserialize, Serialize};

use aition_core::errors::AitionResult;
use aition_core::relationship::{CausalCategory, RelationshipFilter};
use aition_core::traits::ICausalStore;

/// Aggregate view of an agent's recorded causal structure. All arrays
/// are empty when the agent has no relationships; absence of data is
/// never an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CausalPatternSummary {
    pub strongest_causes: Vec<StrongCause>,
    pub common_effects: Vec<CommonEffect>,
    pub causal_categories: Vec<CategoryPattern>,
    pub temporal_patterns: Vec<TemporalPattern>,
}

/// One `direct` relationship's cause, strongest first.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrongCause {
    pub cause_id: String,
    /// Occurrence marker; always 1 per entry.
    pub count: u64,
    pub strength: f64,
}

/// One relationship's effect.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommonEffect {
    pub effect_id: String,
    /// Occurrence marker; always 1 per entry.
    pub frequency: u64,
    pub magnitude: f64,
}

/// Per-category running aggregate, in first-seen order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryPattern {
    pub category: CausalCategory,
    pub count: u64,
    /// Folded as `(existing + new) / 2` per relationship, oldest first.
    /// The recurrence weights later relationships more heavily than
    /// earlier ones; it is not a true mean, and callers must not treat
    /// it as one.
    pub strength: f64,
}

/// One `temporal` relationship rendered as a "cause -> effect" label.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemporalPattern {
    pub pattern: String,
    /// Occurrence marker; always 1 per entry.
    pub occurrences: u64,
    /// The effect's delay, in the caller's time units.
    pub average_delay: f64,
}

/// Read-only analysis over a relationship store.
pub struct PatternAnalyzer<'s> {
    store: &'s dyn ICausalStore,
}

impl<'s> PatternAnalyzer<'s> {
    pub fn new(store: &'s dyn ICausalStore) -> Self {
        Self { store }
    }

    /// Summarize everything the agent has recorded.
    pub fn analyze(&self, agent_id: &str) -> AitionResult<CausalPatternSummary> {
        let mut relationships = self
            .store
            .query_by_agent(agent_id, &RelationshipFilter::default())?;
        // The store returns most recent first; the folds run oldest
        // first so the running recurrences accumulate in story order.
        relationships.reverse();

        Ok(CausalPatternSummary {
            strongest_causes: folds::strongest_causes(&relationships),
            common_effects: folds::common_effects(&relationships),
            causal_categories: folds::causal_categories(&relationships),
            temporal_patterns: folds::temporal_patterns(&relationships),
        })
    }
}
