use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::types::{CausalCategory, CausalRelationType};
use super::CausalRelationship;

/// Optional predicates for agent-scoped queries. `Default` matches
/// everything. Bounds are inclusive.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RelationshipFilter {
    pub relation_type: Option<CausalRelationType>,
    pub category: Option<CausalCategory>,
    pub min_strength: Option<f64>,
    pub max_strength: Option<f64>,
    pub min_confidence: Option<f64>,
    pub max_confidence: Option<f64>,
    pub since: Option<DateTime<Utc>>,
    pub until: Option<DateTime<Utc>>,
}

impl RelationshipFilter {
    /// Whether a relationship passes every set predicate.
    pub fn matches(&self, relationship: &CausalRelationship) -> bool {
        if let Some(t) = self.relation_type {
            if relationship.relation_type != t {
                return false;
            }
        }
        if let Some(c) = self.category {
            if relationship.category != c {
                return false;
            }
        }
        if let Some(min) = self.min_strength {
            if relationship.strength < min {
                return false;
            }
        }
        if let Some(max) = self.max_strength {
            if relationship.strength > max {
                return false;
            }
        }
        if let Some(min) = self.min_confidence {
            if relationship.confidence < min {
                return false;
            }
        }
        if let Some(max) = self.max_confidence {
            if relationship.confidence > max {
                return false;
            }
        }
        if let Some(since) = self.since {
            if relationship.timestamp < since {
                return false;
            }
        }
        if let Some(until) = self.until {
            if relationship.timestamp > until {
                return false;
            }
        }
        true
    }
}
