use serde::{Deserialize, Serialize};

/// How the cause is believed to produce the effect.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CausalMechanism {
    /// Ordered steps from cause to effect.
    pub steps: Vec<String>,
    pub preconditions: Vec<Precondition>,
    pub moderators: Vec<Moderator>,
}

/// A condition that must (or may) hold for the mechanism to fire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Precondition {
    pub description: String,
    /// Required preconditions gate the mechanism; optional ones modulate it.
    #[serde(default)]
    pub required: bool,
    /// Probability the precondition holds, 0.0..=1.0.
    #[serde(default)]
    pub probability: f64,
}

/// An external factor that changes how the mechanism plays out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Moderator {
    pub description: String,
    pub influence: ModeratorInfluence,
}

/// What a moderator does to the effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModeratorInfluence {
    Amplify,
    Diminish,
    Reverse,
    Delay,
}
