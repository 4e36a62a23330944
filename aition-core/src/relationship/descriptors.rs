use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Where and when a cause operates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CauseContext {
    /// Interval within which the cause was active.
    pub temporal_window: Option<TimeWindow>,
    /// Free-form spatial scope ("datacenter-eu-1", "kitchen", ...).
    pub spatial_scope: Option<String>,
    /// Actors involved when the cause is a social one.
    pub social_actors: Vec<String>,
}

/// Half-open observation interval. Either bound may be absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TimeWindow {
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
}

/// The cause side of a relationship. Nodes have no table of their own;
/// this descriptor is the only place a cause node is materialized.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CauseDescriptor {
    /// Opaque node id. Graph structure is rediscovered by matching these.
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Free-form node kind ("event", "decision", "state", ...).
    #[serde(rename = "type", default)]
    pub kind: String,
    /// Caller-defined attributes, passed through untouched.
    #[serde(default)]
    pub attributes: serde_json::Value,
    #[serde(default)]
    pub context: CauseContext,
}

/// The effect side of a relationship.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EffectDescriptor {
    /// Opaque node id. Graph structure is rediscovered by matching these.
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Free-form node kind ("event", "decision", "state", ...).
    #[serde(rename = "type", default)]
    pub kind: String,
    /// Caller-defined attributes, passed through untouched.
    #[serde(default)]
    pub attributes: serde_json::Value,
    /// Size and sign of the effect, -1.0..=1.0.
    #[serde(default)]
    pub magnitude: f64,
    /// Probability the effect occurs given the cause, 0.0..=1.0.
    #[serde(default)]
    pub probability: f64,
    /// Time units between cause and effect onset.
    #[serde(default)]
    pub delay: f64,
    /// Time units the effect persists.
    #[serde(default)]
    pub duration: f64,
}
