//! # aition-graph
//!
//! The read-only graph layer over the relationship store: bounded
//! causal-chain traversal (forward, backward, bidirectional) and
//! aggregate pattern analysis. Neither component ever writes; both
//! rediscover graph structure by matching cause/effect node ids and
//! ignore the advisory `network` back-pointers on the documents.

pub mod patterns;
pub mod traversal;

pub use patterns::{CausalPatternSummary, PatternAnalyzer};
pub use traversal::{CausalChain, ChainLink, Direction, TraversalEngine};
