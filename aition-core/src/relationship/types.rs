use serde::{Deserialize, Serialize};

/// The five kinds of causal linkage a relationship can assert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CausalRelationType {
    /// Cause produces the effect on its own.
    Direct,
    /// Cause acts through one or more intermediaries.
    Indirect,
    /// Cause produces the effect only under stated preconditions.
    Conditional,
    /// Cause raises the probability of the effect.
    Probabilistic,
    /// Cause precedes and times the effect.
    Temporal,
}

impl CausalRelationType {
    pub const COUNT: usize = 5;

    /// All variants for iteration.
    pub const ALL: [CausalRelationType; 5] = [
        Self::Direct,
        Self::Indirect,
        Self::Conditional,
        Self::Probabilistic,
        Self::Temporal,
    ];
}

/// Domain a relationship belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CausalCategory {
    Physical,
    Logical,
    Social,
    Economic,
    Psychological,
    Temporal,
}

impl CausalCategory {
    pub const COUNT: usize = 6;

    /// All variants for iteration.
    pub const ALL: [CausalCategory; 6] = [
        Self::Physical,
        Self::Logical,
        Self::Social,
        Self::Economic,
        Self::Psychological,
        Self::Temporal,
    ];
}
