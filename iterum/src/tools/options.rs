use crate::error::RetryError;

/// Number of retries used when none is configured.
pub const DEFAULT_RETRY_COUNT: usize = 3;

/// Smallest accepted retry count.
pub const MIN_RETRY_COUNT: usize = 1;

/// Largest accepted retry count.
pub const MAX_RETRY_COUNT: usize = 5;

/// Configuration for a retry session.
///
/// Unset fields fall back to their defaults when the options are
/// resolved. The options are copied into the session, so the same
/// value can be reused for any number of independent calls.
///
/// # Examples
///
/// ```rust
/// use iterum::tools::RetryOptions;
///
/// let options = RetryOptions::new().retry_count(2);
/// assert_eq!(options.resolve(), Ok(2));
///
/// assert_eq!(RetryOptions::default().resolve(), Ok(3));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RetryOptions {
    /// Retries allowed after the first failed attempt.
    retry_count: Option<usize>,
}

impl RetryOptions {
    /// Creates options with every field unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets how many times a failed operation may be retried.
    ///
    /// The value is only checked when the options are resolved, so an
    /// out-of-range count surfaces from [`retry`](crate::tools::retry)
    /// rather than from here.
    pub fn retry_count(mut self, n: usize) -> Self {
        self.retry_count = Some(n);
        self
    }

    /// Returns the effective retry count, or an error if it is outside
    /// `MIN_RETRY_COUNT..=MAX_RETRY_COUNT`.
    pub fn resolve(&self) -> Result<usize, RetryError> {
        let value = self.retry_count.unwrap_or(DEFAULT_RETRY_COUNT);

        if !(MIN_RETRY_COUNT..=MAX_RETRY_COUNT).contains(&value) {
            return Err(RetryError::InvalidRetryCount {
                value,
                min: MIN_RETRY_COUNT,
                max: MAX_RETRY_COUNT,
            });
        }

        Ok(value)
    }
}
