//! Bidirectional traversal: the forward and backward partitions computed
//! independently. A forward chain and a backward chain through the same
//! start node represent different directions of causal flow and are
//! never fused; they meet only in the combined result list.

use aition_core::errors::AitionResult;
use aition_core::traits::ICausalStore;

use super::{trace_effects, trace_origins, CausalChain};

/// Union of both partitions, unranked (the engine ranks the whole list).
pub fn trace(
    store: &dyn ICausalStore,
    start_id: &str,
    max_depth: usize,
) -> AitionResult<Vec<CausalChain>> {
    let mut chains = trace_effects::trace(store, start_id, max_depth)?;
    chains.extend(trace_origins::trace(store, start_id, max_depth)?);
    Ok(chains)
}
