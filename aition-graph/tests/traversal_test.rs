//! Traversal integration tests against the SQLite engine.

use aition_core::errors::AitionError;
use aition_core::traits::ICausalStore;
use aition_graph::traversal::{Direction, TraversalEngine};
use aition_storage::StorageEngine;
use test_fixtures::edge;

const EPS: f64 = 1e-12;

/// A -> B (0.8) and B -> C (0.6), one agent, physical/direct.
fn two_edge_chain() -> StorageEngine {
    let engine = StorageEngine::open_in_memory().unwrap();
    engine
        .store(edge("agent-1", "a", "b").at(0).strength(0.8).build())
        .unwrap();
    engine
        .store(edge("agent-1", "b", "c").at(60).strength(0.6).build())
        .unwrap();
    engine
}

#[test]
fn forward_returns_stored_edge_at_depth_zero() {
    let store = StorageEngine::open_in_memory().unwrap();
    store
        .store(edge("agent-1", "a", "b").strength(0.7).build())
        .unwrap();

    let engine = TraversalEngine::new(&store);
    let chains = engine.traverse("a", Direction::Forward, 1).unwrap();

    assert_eq!(chains.len(), 1);
    let chain = &chains[0];
    assert_eq!(chain.links.len(), 1);
    assert_eq!(chain.links[0].depth, 0);
    assert_eq!(chain.origin().cause.id, "a");
    assert_eq!(chain.origin().effect.id, "b");
    assert_eq!(chain.depth, 0);
    assert_eq!(chain.path, ["a", "b"]);
    assert!((chain.total_strength - 0.7).abs() < EPS);
    assert_eq!(chain.direction, Direction::Forward);
}

#[test]
fn backward_returns_the_same_edge_mirrored() {
    let store = StorageEngine::open_in_memory().unwrap();
    store
        .store(edge("agent-1", "a", "b").strength(0.7).build())
        .unwrap();

    let engine = TraversalEngine::new(&store);
    let chains = engine.traverse("b", Direction::Backward, 3).unwrap();

    assert_eq!(chains.len(), 1);
    let chain = &chains[0];
    assert_eq!(chain.links[0].depth, 0);
    assert_eq!(chain.origin().cause.id, "a");
    assert_eq!(chain.depth, 0);
    assert_eq!(chain.path, ["b", "a"]);
    assert_eq!(chain.direction, Direction::Backward);
}

#[test]
fn two_edge_scenario_builds_one_chain() {
    let store = two_edge_chain();
    let engine = TraversalEngine::new(&store);

    let chains = engine.traverse("a", Direction::Forward, 5).unwrap();

    assert_eq!(chains.len(), 1);
    let chain = &chains[0];
    assert_eq!(chain.path, ["a", "b", "c"]);
    assert_eq!(chain.depth, 1);
    assert_eq!(chain.links.len(), 2);
    assert_eq!(chain.links[1].depth, 1);
    assert!((chain.total_strength - 0.48).abs() < EPS);
}

#[test]
fn backward_walks_the_chain_from_the_far_end() {
    let store = two_edge_chain();
    let engine = TraversalEngine::new(&store);

    let chains = engine.traverse("c", Direction::Backward, 5).unwrap();

    assert_eq!(chains.len(), 1);
    let chain = &chains[0];
    assert_eq!(chain.path, ["c", "b", "a"]);
    assert_eq!(chain.depth, 1);
    assert!((chain.total_strength - 0.6 * 0.8).abs() < EPS);
}

#[test]
fn depth_bound_caps_edges_and_hop_depths() {
    let store = StorageEngine::open_in_memory().unwrap();
    // Linear chain of 6 edges: n0 -> n1 -> ... -> n6.
    for i in 0..6 {
        store
            .store(
                edge("agent-1", &format!("n{i}"), &format!("n{}", i + 1))
                    .at(i64::from(i))
                    .build(),
            )
            .unwrap();
    }

    let engine = TraversalEngine::new(&store);
    let chains = engine.traverse("n0", Direction::Forward, 3).unwrap();

    assert_eq!(chains.len(), 1);
    let chain = &chains[0];
    assert_eq!(chain.links.len(), 3, "at most max_depth edges");
    assert!(chain.links.iter().all(|l| l.depth <= 2));
    assert_eq!(chain.depth, 2);
    assert_eq!(chain.path, ["n0", "n1", "n2", "n3"]);
}

#[test]
fn max_depth_one_returns_unexpanded_seeds() {
    let store = two_edge_chain();
    let engine = TraversalEngine::new(&store);

    let chains = engine.traverse("a", Direction::Forward, 1).unwrap();
    assert_eq!(chains.len(), 1);
    assert_eq!(chains[0].depth, 0);
    assert_eq!(chains[0].path, ["a", "b"]);
    assert!((chains[0].total_strength - 0.8).abs() < EPS);
}

#[test]
fn default_depth_bound_is_five_edges() {
    let store = StorageEngine::open_in_memory().unwrap();
    // Linear chain of 8 edges, longer than the default bound.
    for i in 0..8 {
        store
            .store(
                edge("agent-1", &format!("n{i}"), &format!("n{}", i + 1))
                    .at(i64::from(i))
                    .build(),
            )
            .unwrap();
    }

    let engine = TraversalEngine::new(&store);
    let chains = engine.traverse_default("n0", Direction::Forward).unwrap();

    assert_eq!(chains.len(), 1);
    assert_eq!(chains[0].links.len(), 5);
    assert_eq!(chains[0].depth, 4);
}

#[test]
fn configured_default_depth_is_honored() {
    use aition_core::config::TraversalConfig;

    let store = two_edge_chain();
    let config = TraversalConfig {
        default_max_depth: 1,
    };
    let engine = TraversalEngine::with_config(&store, &config);

    let chains = engine.traverse_default("a", Direction::Forward).unwrap();
    assert_eq!(chains.len(), 1);
    assert_eq!(chains[0].depth, 0, "seed only under a depth bound of one");
}

#[test]
fn unknown_start_yields_empty_not_error() {
    let store = two_edge_chain();
    let engine = TraversalEngine::new(&store);

    for direction in [Direction::Forward, Direction::Backward, Direction::Both] {
        assert!(engine.traverse("ghost", direction, 5).unwrap().is_empty());
    }
}

#[test]
fn zero_max_depth_is_rejected() {
    let store = two_edge_chain();
    let engine = TraversalEngine::new(&store);

    let result = engine.traverse("a", Direction::Forward, 0);
    assert!(matches!(result, Err(AitionError::Traversal(_))));
}

#[test]
fn self_loop_terminates_at_depth_zero() {
    let store = StorageEngine::open_in_memory().unwrap();
    store
        .store(edge("agent-1", "x", "x").strength(0.9).build())
        .unwrap();

    let engine = TraversalEngine::new(&store);
    let chains = engine.traverse("x", Direction::Forward, 5).unwrap();

    assert_eq!(chains.len(), 1);
    assert_eq!(chains[0].depth, 0);
    assert_eq!(chains[0].path, ["x", "x"]);
    assert!((chains[0].total_strength - 0.9).abs() < EPS);
}

#[test]
fn two_node_cycle_truncates_at_the_repeat() {
    let store = StorageEngine::open_in_memory().unwrap();
    store
        .store(edge("agent-1", "a", "b").at(0).strength(0.8).build())
        .unwrap();
    store
        .store(edge("agent-1", "b", "a").at(60).strength(0.7).build())
        .unwrap();

    let engine = TraversalEngine::new(&store);

    let forward = engine.traverse("a", Direction::Forward, 10).unwrap();
    assert_eq!(forward.len(), 1);
    assert_eq!(forward[0].path, ["a", "b"]);
    assert_eq!(forward[0].depth, 0);

    let backward = engine.traverse("a", Direction::Backward, 10).unwrap();
    assert_eq!(backward.len(), 1);
    assert_eq!(backward[0].path, ["a", "b"]);
}

#[test]
fn branching_enumerates_each_maximal_path() {
    let store = StorageEngine::open_in_memory().unwrap();
    store
        .store(edge("agent-1", "a", "b").at(0).strength(0.8).build())
        .unwrap();
    store
        .store(edge("agent-1", "b", "c").at(60).strength(0.9).build())
        .unwrap();
    store
        .store(edge("agent-1", "b", "d").at(120).strength(0.3).build())
        .unwrap();

    let engine = TraversalEngine::new(&store);
    let chains = engine.traverse("a", Direction::Forward, 5).unwrap();

    assert_eq!(chains.len(), 2);
    // Ranked: the 0.8 * 0.9 branch beats the 0.8 * 0.3 branch.
    assert_eq!(chains[0].path, ["a", "b", "c"]);
    assert!((chains[0].total_strength - 0.72).abs() < EPS);
    assert_eq!(chains[1].path, ["a", "b", "d"]);
    assert!((chains[1].total_strength - 0.24).abs() < EPS);
}

#[test]
fn ranking_breaks_ties_by_shorter_depth() {
    let store = StorageEngine::open_in_memory().unwrap();
    // Seed a -> b is terminal with strength 0.8; seed a -> c continues
    // through a strength-1.0 hop, also totalling 0.8.
    store
        .store(edge("agent-1", "a", "b").at(0).strength(0.8).build())
        .unwrap();
    store
        .store(edge("agent-1", "a", "c").at(60).strength(0.8).build())
        .unwrap();
    store
        .store(edge("agent-1", "c", "e").at(120).strength(1.0).build())
        .unwrap();

    let engine = TraversalEngine::new(&store);
    let chains = engine.traverse("a", Direction::Forward, 5).unwrap();

    assert_eq!(chains.len(), 2);
    assert!((chains[0].total_strength - chains[1].total_strength).abs() < EPS);
    assert_eq!(chains[0].depth, 0, "shallower chain wins the tie");
    assert_eq!(chains[0].path, ["a", "b"]);
    assert_eq!(chains[1].path, ["a", "c", "e"]);
}

#[test]
fn both_reports_forward_and_backward_partitions_separately() {
    let store = two_edge_chain();
    let engine = TraversalEngine::new(&store);

    let chains = engine.traverse("b", Direction::Both, 5).unwrap();

    assert_eq!(chains.len(), 2);
    // Ranked across partitions: the backward seed (0.8) outranks the
    // forward seed (0.6).
    assert_eq!(chains[0].direction, Direction::Backward);
    assert_eq!(chains[0].path, ["b", "a"]);
    assert_eq!(chains[1].direction, Direction::Forward);
    assert_eq!(chains[1].path, ["b", "c"]);
}

#[test]
fn zero_strength_hop_floors_total_strength() {
    let store = StorageEngine::open_in_memory().unwrap();
    store
        .store(edge("agent-1", "a", "b").at(0).strength(0.8).build())
        .unwrap();
    store
        .store(edge("agent-1", "b", "c").at(60).strength(0.0).build())
        .unwrap();

    let engine = TraversalEngine::new(&store);
    let chains = engine.traverse("a", Direction::Forward, 5).unwrap();

    assert_eq!(chains.len(), 1);
    assert!(chains[0].total_strength.abs() < EPS);
    assert!(chains[0].total_strength <= 0.8 + EPS, "never exceeds the seed");
}

#[test]
fn traversal_ignores_advisory_network_pointers() {
    let store = StorageEngine::open_in_memory().unwrap();

    // The stored back-pointers reference a node no edge mentions; they
    // must never leak into a chain.
    let mut misleading = edge("agent-1", "a", "b").at(0).build();
    misleading.network.child_effects.push("ghost".to_string());
    misleading.network.parent_causes.push("ghost".to_string());
    store.store(misleading).unwrap();

    // This edge has empty network hints but is still discovered.
    store.store(edge("agent-1", "b", "c").at(60).build()).unwrap();

    let engine = TraversalEngine::new(&store);
    let chains = engine.traverse("a", Direction::Forward, 5).unwrap();

    assert_eq!(chains.len(), 1);
    assert_eq!(chains[0].path, ["a", "b", "c"]);
}

#[test]
fn traversal_spans_agents_by_node_id() {
    // Edges are matched by node id, not by owner; the graph is one
    // logical collection.
    let store = StorageEngine::open_in_memory().unwrap();
    store
        .store(edge("agent-1", "a", "b").at(0).build())
        .unwrap();
    store
        .store(edge("agent-2", "b", "c").at(60).build())
        .unwrap();

    let engine = TraversalEngine::new(&store);
    let chains = engine.traverse("a", Direction::Forward, 5).unwrap();
    assert_eq!(chains.len(), 1);
    assert_eq!(chains[0].path, ["a", "b", "c"]);
}
