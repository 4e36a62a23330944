mod storage;

pub use storage::ICausalStore;
