//! The four summary folds. Input slices are ordered oldest first.

use aition_core::relationship::{CausalRelationType, CausalRelationship};

use super::{CategoryPattern, CommonEffect, StrongCause, TemporalPattern};

/// One entry per `direct` relationship, sorted by strength descending.
/// Duplicate cause ids stay separate entries.
pub(super) fn strongest_causes(relationships: &[CausalRelationship]) -> Vec<StrongCause> {
    let mut causes: Vec<StrongCause> = relationships
        .iter()
        .filter(|r| r.relation_type == CausalRelationType::Direct)
        .map(|r| StrongCause {
            cause_id: r.cause.id.clone(),
            count: 1,
            strength: r.strength,
        })
        .collect();
    causes.sort_by(|a, b| {
        b.strength
            .partial_cmp(&a.strength)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    causes
}

/// One entry per relationship, in fold order.
pub(super) fn common_effects(relationships: &[CausalRelationship]) -> Vec<CommonEffect> {
    relationships
        .iter()
        .map(|r| CommonEffect {
            effect_id: r.effect.id.clone(),
            frequency: 1,
            magnitude: r.effect.magnitude,
        })
        .collect()
}

/// One entry per distinct category, first-seen order. Strength follows
/// the `(existing + new) / 2` recurrence.
pub(super) fn causal_categories(relationships: &[CausalRelationship]) -> Vec<CategoryPattern> {
    let mut patterns: Vec<CategoryPattern> = Vec::new();
    for r in relationships {
        match patterns.iter_mut().find(|p| p.category == r.category) {
            Some(pattern) => {
                pattern.count += 1;
                pattern.strength = (pattern.strength + r.strength) / 2.0;
            }
            None => patterns.push(CategoryPattern {
                category: r.category,
                count: 1,
                strength: r.strength,
            }),
        }
    }
    patterns
}

/// One entry per `temporal` relationship.
pub(super) fn temporal_patterns(relationships: &[CausalRelationship]) -> Vec<TemporalPattern> {
    relationships
        .iter()
        .filter(|r| r.relation_type == CausalRelationType::Temporal)
        .map(|r| TemporalPattern {
            pattern: format!("{} -> {}", r.cause.id, r.effect.id),
            occurrences: 1,
            average_delay: r.effect.delay,
        })
        .collect()
}
