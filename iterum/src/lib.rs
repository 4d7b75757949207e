//! # Iterum
//!
//! **Iterum** is a small retry combinator for fallible futures.
//!
//! Given a closure that produces a future resolving to `Result<T, E>`,
//! [`tools::retry`] re-runs it after failures, up to a bounded number of
//! times, and resolves with the first success or with the error of the
//! final attempt. Attempts run strictly one after another, and the
//! session keeps a single failure counter for its whole lifetime.
//!
//! The crate offers:
//!
//! - **Synchronous validation** of the retry configuration, before any
//!   attempt is made
//! - **A lazy `Retry` future** that surfaces the operation's own error
//!   untouched
//! - **A current-thread executor** with [`block_on`] for blocking waits
//! - **Ergonomic macros** `#[iterum::main]` and `#[iterum::test]`
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use iterum::tools::{retry, RetryOptions};
//!
//! #[iterum::main]
//! async fn main() {
//!     let session = retry(|| fetch_status(), RetryOptions::new().retry_count(2))
//!         .expect("retry count in range");
//!
//!     match session.await {
//!         Ok(status) => println!("status: {status}"),
//!         Err(err) => eprintln!("gave up: {err}"),
//!     }
//! }
//! ```
//!
//! ## Modules
//!
//! - [`tools`]: The retry combinator and its options
//! - [`error`]: Configuration errors
//!
//! ## Logging
//!
//! Session progress is reported through [`tracing`] events under the
//! `iterum` target. The crate never installs a subscriber.

mod runtime;

pub mod error;
pub mod tools;

pub use error::RetryError;
pub use runtime::{Runtime, block_on};

pub use iterum_macros::*;
