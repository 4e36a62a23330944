/// Aition system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default traversal depth bound when the caller does not supply one.
pub const DEFAULT_MAX_DEPTH: usize = 5;

/// Hard ceiling on traversal depth, regardless of caller input.
pub const MAX_TRAVERSAL_DEPTH: usize = 50;

/// Default number of read connections in the storage pool.
pub const DEFAULT_READ_POOL_SIZE: usize = 4;
