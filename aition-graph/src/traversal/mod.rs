//! Bounded causal-chain traversal.
//!
//! Chains are grown from seed edges by repeated store queries: one
//! `find_by_cause` / `find_by_effect` call per expansion step. A chain
//! holds at most `max_depth` edges, so the depth bound also caps the
//! number of expansion queries per chain and guarantees termination on
//! cyclic data.

pub mod bidirectional;
pub mod trace_effects;
pub mod trace_origins;

use serde::{Deserialize, Serialize};

use aition_core::config::TraversalConfig;
use aition_core::constants::{DEFAULT_MAX_DEPTH, MAX_TRAVERSAL_DEPTH};
use aition_core::errors::{AitionResult, TraversalError};
use aition_core::relationship::CausalRelationship;
use aition_core::traits::ICausalStore;

/// Which way causal flow is followed from the start node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Follow effects: edges whose cause matches the frontier.
    Forward,
    /// Follow origins: edges whose effect matches the frontier.
    Backward,
    /// Both partitions, computed independently and merged only in the
    /// ranked result list.
    Both,
}

/// One edge of a chain together with its hop distance from the seed.
#[derive(Debug, Clone, Serialize)]
pub struct ChainLink {
    pub relationship: CausalRelationship,
    /// 0-indexed hop distance from the seed; the seed itself is 0.
    pub depth: usize,
}

/// A maximal causal chain grown from one seed edge. `links` is never
/// empty: the seed is always present at depth 0.
#[derive(Debug, Clone, Serialize)]
pub struct CausalChain {
    /// Seed first, continuations in hop order.
    pub links: Vec<ChainLink>,
    /// Hops beyond the seed.
    pub depth: usize,
    /// Node ids from the start node to the chain's terminus.
    pub path: Vec<String>,
    /// Seed strength scaled by the mean continuation strength. Never
    /// exceeds the seed's own strength.
    pub total_strength: f64,
    /// Partition this chain belongs to.
    pub direction: Direction,
}

impl CausalChain {
    /// The originating (seed) relationship.
    pub fn origin(&self) -> &CausalRelationship {
        &self.links[0].relationship
    }
}

/// Build a finished chain from its links and node path.
pub(crate) fn seal(links: Vec<ChainLink>, path: Vec<String>, direction: Direction) -> CausalChain {
    let depth = links.len() - 1;
    let total_strength = score(&links);
    CausalChain {
        links,
        depth,
        path,
        total_strength,
        direction,
    }
}

/// `seed.strength * mean(continuation strengths)`. The mean over an
/// empty continuation is 1, so an unexpanded seed keeps its own strength.
fn score(links: &[ChainLink]) -> f64 {
    let seed = links[0].relationship.strength;
    if links.len() == 1 {
        return seed;
    }
    let continuation: f64 = links[1..]
        .iter()
        .map(|link| link.relationship.strength)
        .sum::<f64>()
        / (links.len() - 1) as f64;
    seed * continuation
}

/// Strongest first; ties prefer the shorter chain.
pub(crate) fn rank(chains: &mut [CausalChain]) {
    chains.sort_by(|a, b| {
        b.total_strength
            .partial_cmp(&a.total_strength)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.depth.cmp(&b.depth))
    });
}

/// Read-only traversal over a relationship store.
pub struct TraversalEngine<'s> {
    store: &'s dyn ICausalStore,
    default_max_depth: usize,
}

impl<'s> TraversalEngine<'s> {
    pub fn new(store: &'s dyn ICausalStore) -> Self {
        Self {
            store,
            default_max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Construct with a configured default depth bound.
    pub fn with_config(store: &'s dyn ICausalStore, config: &TraversalConfig) -> Self {
        Self {
            store,
            default_max_depth: config.default_max_depth,
        }
    }

    /// Traverse with the default depth bound.
    pub fn traverse_default(
        &self,
        start_id: &str,
        direction: Direction,
    ) -> AitionResult<Vec<CausalChain>> {
        self.traverse(start_id, direction, self.default_max_depth)
    }

    /// Enumerate every maximal chain reachable from `start_id`, ranked
    /// by total strength. A start node with no matching edges yields an
    /// empty list, not an error.
    pub fn traverse(
        &self,
        start_id: &str,
        direction: Direction,
        max_depth: usize,
    ) -> AitionResult<Vec<CausalChain>> {
        if max_depth == 0 {
            return Err(TraversalError::InvalidMaxDepth { given: max_depth }.into());
        }
        let max_depth = max_depth.min(MAX_TRAVERSAL_DEPTH);

        let mut chains = match direction {
            Direction::Forward => trace_effects::trace(self.store, start_id, max_depth)?,
            Direction::Backward => trace_origins::trace(self.store, start_id, max_depth)?,
            Direction::Both => bidirectional::trace(self.store, start_id, max_depth)?,
        };
        rank(&mut chains);
        Ok(chains)
    }
}
