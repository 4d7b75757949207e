//! Retry utilities for asynchronous operations.
//!
//! The main entry point is [`retry`], which validates a
//! [`RetryOptions`] and returns a future that re-runs an operation
//! produced by a factory closure until it succeeds or the retry budget
//! is spent.

mod options;
mod retry;

#[doc(inline)]
pub use options::{DEFAULT_RETRY_COUNT, MAX_RETRY_COUNT, MIN_RETRY_COUNT, RetryOptions};

#[doc(inline)]
pub use retry::{Retry, RetryState, retry};
