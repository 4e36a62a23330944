use serde::{Deserialize, Serialize};

/// Evidence attached to a relationship. Purely descriptive input from the
/// caller; nothing here is ever aggregated or re-scored by the engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CausalEvidence {
    pub empirical: Vec<EmpiricalItem>,
    pub correlations: Vec<Correlation>,
    /// Citations or arguments supporting the mechanism.
    pub theoretical: Vec<String>,
    /// Observations that cut against the relationship.
    pub counter_evidence: Vec<String>,
}

/// One observation or experiment backing the relationship.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmpiricalItem {
    pub description: String,
    #[serde(default)]
    pub method: EmpiricalMethod,
    /// How reliable the data source is, 0.0..=1.0.
    #[serde(default)]
    pub reliability: f64,
    /// Confidence that the item shows what it claims, 0.0..=1.0.
    #[serde(default)]
    pub confidence: f64,
}

/// How an empirical item was obtained.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmpiricalMethod {
    #[default]
    Observation,
    Experiment,
}

/// A correlation cited as (weak) support.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Correlation {
    pub description: String,
    #[serde(default)]
    pub coefficient: f64,
}
