//! Fixture builders and golden datasets for the aition test suites.
//!
//! Builders produce fully populated relationship drafts with a fixed
//! base timestamp, so recency ordering in tests is deterministic.

use std::path::PathBuf;

use chrono::{DateTime, Duration, TimeZone, Utc};
use serde::de::DeserializeOwned;

use aition_core::relationship::{
    CausalCategory, CausalRelationType, CausalRelationship, CauseDescriptor, EffectDescriptor,
};

/// Base timestamp every builder starts from.
pub fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
}

/// Start a relationship draft between two nodes.
pub fn edge(agent_id: &str, cause_id: &str, effect_id: &str) -> RelationshipBuilder {
    RelationshipBuilder::new(agent_id, cause_id, effect_id)
}

/// Fluent builder over [`CausalRelationship`]. Defaults: direct/physical,
/// strength 0.8, confidence 0.9, base timestamp.
pub struct RelationshipBuilder {
    inner: CausalRelationship,
}

impl RelationshipBuilder {
    pub fn new(agent_id: &str, cause_id: &str, effect_id: &str) -> Self {
        let inner = CausalRelationship {
            id: String::new(),
            agent_id: agent_id.to_string(),
            session_id: None,
            timestamp: base_time(),
            relation_type: CausalRelationType::Direct,
            category: CausalCategory::Physical,
            strength: 0.8,
            confidence: 0.9,
            cause: CauseDescriptor {
                id: cause_id.to_string(),
                name: format!("node {cause_id}"),
                description: format!("fixture cause {cause_id}"),
                kind: "event".to_string(),
                ..Default::default()
            },
            effect: EffectDescriptor {
                id: effect_id.to_string(),
                name: format!("node {effect_id}"),
                description: format!("fixture effect {effect_id}"),
                kind: "event".to_string(),
                magnitude: 0.5,
                probability: 0.9,
                delay: 1.0,
                duration: 1.0,
                ..Default::default()
            },
            mechanism: Default::default(),
            evidence: Default::default(),
            network: Default::default(),
            temporal: Default::default(),
            inference: Default::default(),
            learning: Default::default(),
            metadata: Default::default(),
            created_at: base_time(),
            updated_at: base_time(),
        };
        Self { inner }
    }

    pub fn relation_type(mut self, relation_type: CausalRelationType) -> Self {
        self.inner.relation_type = relation_type;
        self
    }

    pub fn category(mut self, category: CausalCategory) -> Self {
        self.inner.category = category;
        self
    }

    pub fn strength(mut self, strength: f64) -> Self {
        self.inner.strength = strength;
        self
    }

    pub fn confidence(mut self, confidence: f64) -> Self {
        self.inner.confidence = confidence;
        self
    }

    pub fn session(mut self, session_id: &str) -> Self {
        self.inner.session_id = Some(session_id.to_string());
        self
    }

    pub fn magnitude(mut self, magnitude: f64) -> Self {
        self.inner.effect.magnitude = magnitude;
        self
    }

    pub fn probability(mut self, probability: f64) -> Self {
        self.inner.effect.probability = probability;
        self
    }

    pub fn delay(mut self, delay: f64) -> Self {
        self.inner.effect.delay = delay;
        self
    }

    /// Shift the observation time `seconds` past the base timestamp.
    pub fn at(mut self, seconds: i64) -> Self {
        self.inner.timestamp = base_time() + Duration::seconds(seconds);
        self
    }

    pub fn timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.inner.timestamp = timestamp;
        self
    }

    pub fn build(self) -> CausalRelationship {
        self.inner
    }
}

/// Root directory of the test-fixtures folder. Works from any crate in
/// the workspace: walks up from the manifest dir.
fn fixtures_root() -> PathBuf {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);
    while !path.join("test-fixtures").exists() {
        if !path.pop() {
            panic!("could not find test-fixtures directory from CARGO_MANIFEST_DIR={manifest_dir}");
        }
    }
    path.join("test-fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("failed to parse fixture {}: {}", path.display(), e))
}

/// Load a fixture file as a raw JSON value.
pub fn load_fixture_value(relative_path: &str) -> serde_json::Value {
    load_fixture(relative_path)
}

/// Absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}
