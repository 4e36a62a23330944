//! # aition-core
//!
//! Foundation crate for the Aition causal knowledge store.
//! Defines the relationship document model, validation, traits, errors,
//! config, and constants. Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod relationship;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::AitionConfig;
pub use errors::{AitionError, AitionResult};
pub use relationship::{
    CausalCategory, CausalRelationType, CausalRelationship, RelationshipFilter,
};
pub use traits::ICausalStore;
