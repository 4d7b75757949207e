use super::waker::Signal;

use std::future::Future;
use std::pin::pin;
use std::sync::Arc;
use std::task::{Context, Poll, Waker};

/// A current-thread executor.
///
/// `Runtime` drives a single future to completion on the calling
/// thread, parking it whenever the future is pending and resuming it
/// when the future's waker fires. Wakers may be triggered from any
/// thread.
///
/// There is no task spawning, no timer and no I/O driver: the runtime
/// exists so a [`Retry`](crate::tools::Retry) session, or any other
/// future, can be observed with a blocking wait.
pub struct Runtime {
    signal: Arc<Signal>,
}

impl Runtime {
    /// Creates a new runtime.
    pub fn new() -> Self {
        Self {
            signal: Arc::new(Signal::new()),
        }
    }

    /// Runs a future to completion, blocking the current thread.
    ///
    /// This is the synchronous entry point used by `#[iterum::main]`
    /// and `#[iterum::test]`. The future does not need to be `Send` or
    /// `'static`, since it never leaves the calling thread.
    ///
    /// # Examples
    ///
    /// ```rust
    /// let mut runtime = iterum::Runtime::new();
    /// let result = runtime.block_on(async { 42 });
    /// assert_eq!(result, 42);
    /// ```
    pub fn block_on<F: Future>(&mut self, future: F) -> F::Output {
        let mut future = pin!(future);

        let waker = Waker::from(Arc::clone(&self.signal));
        let mut cx = Context::from_waker(&waker);

        self.signal.reset();

        loop {
            if let Poll::Ready(output) = future.as_mut().poll(&mut cx) {
                return output;
            }

            self.signal.wait();
        }
    }
}

impl Default for Runtime {
    fn default() -> Self {
        Self::new()
    }
}
