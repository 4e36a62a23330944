//! Forward traversal: "what did this cause?" — follows edges whose cause
//! is the current frontier's effect.

use std::collections::HashSet;

use aition_core::errors::AitionResult;
use aition_core::traits::ICausalStore;

use super::{seal, CausalChain, ChainLink, Direction};

/// Enumerate every maximal forward chain seeded at `start_id`.
pub fn trace(
    store: &dyn ICausalStore,
    start_id: &str,
    max_depth: usize,
) -> AitionResult<Vec<CausalChain>> {
    let mut chains = Vec::new();

    for seed in store.find_by_cause(start_id)? {
        let path = vec![seed.cause.id.clone(), seed.effect.id.clone()];
        // The visited set is per-chain: only a repeat within one path
        // truncates; the same node may appear in sibling chains.
        let visited: HashSet<String> = path.iter().cloned().collect();
        let links = vec![ChainLink {
            relationship: seed,
            depth: 0,
        }];
        extend(store, links, path, visited, max_depth, &mut chains)?;
    }
    Ok(chains)
}

/// Depth-first extension. Each call issues one expansion query for the
/// chain's terminus; branches fork the path. Only maximal chains are
/// emitted — a chain that extended is represented by its extensions.
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
        for candidate in store.find_by_cause(frontier)? {
            let next_node = candidate.effect.id.clone();
            if visited.contains(&next_node) {
                // Cycle: truncate at the repeat, normal termination.
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
        out.push(seal(links, path, Direction::Forward));
    }
    Ok(())
}
