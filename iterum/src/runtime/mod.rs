//! Blocking execution of futures.
//!
//! This module provides the small executor used to observe a retry
//! session synchronously. It is responsible for:
//! - polling a single future on the calling thread,
//! - parking that thread while the future is pending,
//! - resuming it when a waker fires, from any thread.

mod core;
mod waker;

pub use self::core::Runtime;

use std::future::Future;

/// Runs a future to completion on a fresh [`Runtime`], blocking the
/// current thread.
///
/// # Examples
///
/// ```rust
/// assert_eq!(iterum::block_on(async { "done" }), "done");
/// ```
pub fn block_on<F: Future>(future: F) -> F::Output {
    Runtime::new().block_on(future)
}
