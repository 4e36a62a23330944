/// Rejections raised while validating a relationship document before it
/// is persisted. Never retried; surfaced to the caller as-is.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("{field} is {value}, outside [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("{field} must not be empty")]
    MissingId { field: &'static str },

    #[error("{field} is not a finite number")]
    NotFinite { field: &'static str },
}
