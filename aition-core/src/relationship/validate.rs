//! Invariant checks applied before a relationship document is persisted.

use crate::errors::ValidationError;

use super::CausalRelationship;

/// Check every numeric and identity invariant on a document. The store
/// rejects the record on the first violation; nothing is clamped.
pub fn validate(relationship: &CausalRelationship) -> Result<(), ValidationError> {
    require_id("cause.id", &relationship.cause.id)?;
    require_id("effect.id", &relationship.effect.id)?;

    validate_scores(relationship.strength, relationship.confidence)?;
    unit_range("effect.probability", relationship.effect.probability)?;
    signed_range("effect.magnitude", relationship.effect.magnitude)?;

    for precondition in &relationship.mechanism.preconditions {
        unit_range("mechanism.preconditions.probability", precondition.probability)?;
    }
    for item in &relationship.evidence.empirical {
        unit_range("evidence.empirical.reliability", item.reliability)?;
        unit_range("evidence.empirical.confidence", item.confidence)?;
    }
    Ok(())
}

/// Check the two revisable scores. Shared by `store` and the learning
/// update path so a revision cannot smuggle in an out-of-range value.
pub fn validate_scores(strength: f64, confidence: f64) -> Result<(), ValidationError> {
    unit_range("strength", strength)?;
    unit_range("confidence", confidence)?;
    Ok(())
}

fn require_id(field: &'static str, id: &str) -> Result<(), ValidationError> {
    if id.is_empty() {
        return Err(ValidationError::MissingId { field });
    }
    Ok(())
}

fn unit_range(field: &'static str, value: f64) -> Result<(), ValidationError> {
    bounded(field, value, 0.0, 1.0)
}

fn signed_range(field: &'static str, value: f64) -> Result<(), ValidationError> {
    bounded(field, value, -1.0, 1.0)
}

fn bounded(field: &'static str, value: f64, min: f64, max: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NotFinite { field });
    }
    if value < min || value > max {
        return Err(ValidationError::OutOfRange {
            field,
            value,
            min,
            max,
        });
    }
    Ok(())
}
