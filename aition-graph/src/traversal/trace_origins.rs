//! Backward traversal: "what led to this?" — follows edges whose effect
//! is the current frontier's cause.

use std::collections::HashSet;

use aition_core::errors::AitionResult;
use aition_core::traits::ICausalStore;

use super::{seal, CausalChain, ChainLink, Direction};

/// Enumerate every maximal backward chain seeded at `start_id`. The path
/// mirrors the forward one: it runs from the start node toward ever
/// earlier causes.
pub fn trace(
    store: &dyn ICausalStore,
    start_id: &str,
    max_depth: usize,
) -> AitionResult<Vec<CausalChain>> {
    let mut chains = Vec::new();

    for seed in store.find_by_effect(start_id)? {
        let path = vec![seed.effect.id.clone(), seed.cause.id.clone()];
        let visited: HashSet<String> = path.iter().cloned().collect();
        let links = vec![ChainLink {
            relationship: seed,
            depth: 0,
        }];
        extend(store, links, path, visited, max_depth, &mut chains)?;
    }
    Ok(chains)
}

fn extend(
    store: &dyn ICausalStore,
    links: Vec<ChainLink>,
    path: Vec<String>,
    visited: HashSet<String>,
    max_depth: usize,
    out: &mut Vec<CausalChain>,
) -> AitionResult<()> {
    let mut extended = false;

    if links.len() < max_depth {
        let frontier = &path[path.len() - 1];
        for candidate in store.find_by_effect(frontier)? {
            let next_node = candidate.cause.id.clone();
            if visited.contains(&next_node) {
                continue;
            }
            extended = true;

            let mut next_links = links.clone();
            let depth = next_links.len();
            next_links.push(ChainLink {
                relationship: candidate,
                depth,
            });
            let mut next_path = path.clone();
            next_path.push(next_node.clone());
            let mut next_visited = visited.clone();
            next_visited.insert(next_node);

            extend(store, next_links, next_path, next_visited, max_depth, out)?;
        }
    }

    if !extended {
        out.push(seal(links, path, Direction::Backward));
    }
    Ok(())
}
