//! Integration tests: agent queries, filters, expansion primitives.

use chrono::Duration;

use aition_core::relationship::{CausalCategory, CausalRelationType, RelationshipFilter};
use aition_core::traits::ICausalStore;
use aition_storage::StorageEngine;
use test_fixtures::{base_time, edge};

fn seeded_engine() -> StorageEngine {
    let engine = StorageEngine::open_in_memory().unwrap();
    engine
        .store(
            edge("agent-1", "deploy", "latency-spike")
                .at(0)
                .relation_type(CausalRelationType::Direct)
                .category(CausalCategory::Physical)
                .strength(0.9)
                .confidence(0.8)
                .build(),
        )
        .unwrap();
    engine
        .store(
            edge("agent-1", "latency-spike", "alert")
                .at(60)
                .relation_type(CausalRelationType::Temporal)
                .category(CausalCategory::Logical)
                .strength(0.6)
                .confidence(0.5)
                .build(),
        )
        .unwrap();
    engine
        .store(
            edge("agent-1", "alert", "rollback")
                .at(120)
                .relation_type(CausalRelationType::Direct)
                .category(CausalCategory::Social)
                .strength(0.3)
                .confidence(0.95)
                .build(),
        )
        .unwrap();
    engine
        .store(edge("agent-2", "deploy", "pager-noise").at(30).build())
        .unwrap();
    engine
}

#[test]
fn query_by_agent_returns_most_recent_first() {
    let engine = seeded_engine();
    let results = engine
        .query_by_agent("agent-1", &RelationshipFilter::default())
        .unwrap();

    assert_eq!(results.len(), 3);
    assert_eq!(results[0].cause.id, "alert");
    assert_eq!(results[1].cause.id, "latency-spike");
    assert_eq!(results[2].cause.id, "deploy");
}

#[test]
fn query_by_agent_is_scoped_to_the_agent() {
    let engine = seeded_engine();
    let results = engine
        .query_by_agent("agent-2", &RelationshipFilter::default())
        .unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].effect.id, "pager-noise");

    let results = engine
        .query_by_agent("agent-3", &RelationshipFilter::default())
        .unwrap();
    assert!(results.is_empty());
}

#[test]
fn filter_by_relation_type() {
    let engine = seeded_engine();
    let filter = RelationshipFilter {
        relation_type: Some(CausalRelationType::Direct),
        ..Default::default()
    };
    let results = engine.query_by_agent("agent-1", &filter).unwrap();
    assert_eq!(results.len(), 2);
    assert!(results
        .iter()
        .all(|r| r.relation_type == CausalRelationType::Direct));
}

#[test]
fn filter_by_category_and_ranges() {
    let engine = seeded_engine();

    let filter = RelationshipFilter {
        category: Some(CausalCategory::Logical),
        ..Default::default()
    };
    assert_eq!(engine.query_by_agent("agent-1", &filter).unwrap().len(), 1);

    let filter = RelationshipFilter {
        min_strength: Some(0.5),
        ..Default::default()
    };
    assert_eq!(engine.query_by_agent("agent-1", &filter).unwrap().len(), 2);

    let filter = RelationshipFilter {
        min_strength: Some(0.5),
        min_confidence: Some(0.7),
        ..Default::default()
    };
    let results = engine.query_by_agent("agent-1", &filter).unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].cause.id, "deploy");
}

#[test]
fn filter_by_time_window() {
    let engine = seeded_engine();
    let filter = RelationshipFilter {
        since: Some(base_time() + Duration::seconds(30)),
        until: Some(base_time() + Duration::seconds(90)),
        ..Default::default()
    };
    let results = engine.query_by_agent("agent-1", &filter).unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].cause.id, "latency-spike");
}

#[test]
fn query_has_no_implicit_limit() {
    let engine = StorageEngine::open_in_memory().unwrap();
    for i in 0..250 {
        engine
            .store(edge("agent-1", &format!("c{i}"), &format!("e{i}")).at(i).build())
            .unwrap();
    }
    let results = engine
        .query_by_agent("agent-1", &RelationshipFilter::default())
        .unwrap();
    assert_eq!(results.len(), 250);
}

#[test]
fn find_by_cause_and_effect_match_node_ids() {
    let engine = seeded_engine();

    let out = engine.find_by_cause("deploy").unwrap();
    // Both agents recorded edges out of "deploy".
    assert_eq!(out.len(), 2);
    assert!(out.iter().all(|r| r.cause.id == "deploy"));

    let inbound = engine.find_by_effect("alert").unwrap();
    assert_eq!(inbound.len(), 1);
    assert_eq!(inbound[0].cause.id, "latency-spike");

    assert!(engine.find_by_cause("unknown-node").unwrap().is_empty());
    assert!(engine.find_by_effect("unknown-node").unwrap().is_empty());
}
