use serde::{Deserialize, Serialize};

/// Denormalized back-pointers to neighboring relationships, maintained by
/// the caller. Advisory only: they may be stale, partial, or wrong, and
/// the traversal engine never reads them — chain structure is always
/// rediscovered by matching `cause.id` / `effect.id` directly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CausalNetwork {
    /// Ids of relationships whose effect is this relationship's cause.
    pub parent_causes: Vec<String>,
    /// Ids of relationships whose cause is this relationship's effect.
    pub child_effects: Vec<String>,
    /// Ids of relationships proposing a common cause.
    pub confounders: Vec<String>,
    /// Ids of competing explanations for the same effect.
    pub alternatives: Vec<String>,
}
