/// Rejections of traversal parameters. Raised before any query is issued.
#[derive(Debug, thiserror::Error)]
pub enum TraversalError {
    #[error("max_depth must be a positive integer, got {given}")]
    InvalidMaxDepth { given: usize },
}
