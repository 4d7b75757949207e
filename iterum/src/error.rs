use thiserror::Error;

/// Errors raised while configuring a retry session.
///
/// These are reported synchronously by [`retry`](crate::tools::retry),
/// before the operation is invoked. Failures produced by the operation
/// itself never take this type: they are handed back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RetryError {
    /// The requested retry count lies outside the accepted range.
    #[error("retry count must be between {min} and {max} (got {value})")]
    InvalidRetryCount {
        value: usize,
        min: usize,
        max: usize,
    },
}
