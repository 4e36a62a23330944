//! Property tests over randomly generated, possibly cyclic edge sets.
//! Node ids are drawn from a small pool so cycles, self-loops, and
//! parallel edges all occur regularly.

use proptest::prelude::*;

use aition_core::traits::ICausalStore;
use aition_graph::traversal::{Direction, TraversalEngine};
use aition_storage::StorageEngine;
use test_fixtures::edge;

fn edge_strategy() -> impl Strategy<Value = Vec<(u8, u8, f64)>> {
    prop::collection::vec((0u8..6, 0u8..6, 0.0_f64..=1.0), 1..12)
}

fn seeded_store(edges: &[(u8, u8, f64)]) -> StorageEngine {
    let store = StorageEngine::open_in_memory().unwrap();
    for (i, (cause, effect, strength)) in edges.iter().enumerate() {
        store
            .store(
                edge("agent-1", &format!("n{cause}"), &format!("n{effect}"))
                    .at(i as i64)
                    .strength(*strength)
                    .build(),
            )
            .unwrap();
    }
    store
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn depth_and_strength_bounds_hold(
        edges in edge_strategy(),
        max_depth in 1_usize..6,
    ) {
        let store = seeded_store(&edges);
        let engine = TraversalEngine::new(&store);

        for node in 0..6_u8 {
            let id = format!("n{node}");
            for direction in [Direction::Forward, Direction::Backward, Direction::Both] {
                // Termination on cyclic data is implicit in this call
                // returning at all.
                let chains = engine.traverse(&id, direction, max_depth).unwrap();

                for chain in &chains {
                    prop_assert!(chain.links.len() <= max_depth);
                    prop_assert_eq!(chain.depth, chain.links.len() - 1);
                    prop_assert_eq!(chain.path.len(), chain.links.len() + 1);
                    for (i, link) in chain.links.iter().enumerate() {
                        prop_assert_eq!(link.depth, i);
                    }
                    prop_assert!(
                        chain.total_strength <= chain.origin().strength + 1e-9,
                        "total {} exceeds seed {}",
                        chain.total_strength,
                        chain.origin().strength
                    );
                }

                // Ranked: total strength never increases down the list.
                for pair in chains.windows(2) {
                    prop_assert!(pair[0].total_strength >= pair[1].total_strength - 1e-9);
                }
            }
        }
    }

    #[test]
    fn chains_are_anchored_at_the_start_node(edges in edge_strategy()) {
        let store = seeded_store(&edges);
        let engine = TraversalEngine::new(&store);

        for node in 0..6_u8 {
            let id = format!("n{node}");

            for chain in engine.traverse(&id, Direction::Forward, 5).unwrap() {
                prop_assert_eq!(chain.origin().cause.id.as_str(), id.as_str());
                prop_assert_eq!(chain.path[0].as_str(), id.as_str());
            }
            for chain in engine.traverse(&id, Direction::Backward, 5).unwrap() {
                prop_assert_eq!(chain.origin().effect.id.as_str(), id.as_str());
                prop_assert_eq!(chain.path[0].as_str(), id.as_str());
            }
        }
    }
}
