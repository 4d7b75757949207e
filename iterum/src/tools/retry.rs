use crate::error::RetryError;
use crate::tools::options::RetryOptions;

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use tracing::{debug, warn};

/// Creates a future that retries the operation produced by `factory`
/// until it succeeds or the retry budget is spent.
///
/// The options are validated here, synchronously. An out-of-range
/// retry count is returned as [`RetryError`] and `factory` is never
/// called. A valid configuration yields a lazy [`Retry`] future: the
/// first attempt happens on its first poll.
///
/// The factory must be `Unpin` so the returned future can be polled in
/// place. Ordinary closures are.
///
/// The session makes at most `retry_count + 1` attempts, one at a time.
/// It resolves with the first `Ok` value, or with the `Err` of the last
/// attempt, passed through untouched.
///
/// # Examples
///
/// ```rust
/// use iterum::tools::{retry, RetryOptions};
///
/// let mut calls = 0;
/// let session = retry(
///     || {
///         calls += 1;
///         let n = calls;
///         async move { if n < 3 { Err("busy") } else { Ok(n) } }
///     },
///     RetryOptions::new().retry_count(3),
/// )
/// .expect("valid retry count");
///
/// assert_eq!(iterum::block_on(session), Ok(3));
/// ```
pub fn retry<G, F>(factory: G, options: RetryOptions) -> Result<Retry<G, F>, RetryError>
where
    G: FnMut() -> F + Unpin,
    F: Future,
{
    let retry_count = options.resolve().inspect_err(|err| {
        warn!(error = %err, "rejecting retry configuration");
    })?;

    debug!(retry_count, "starting retry session");

    Ok(Retry::new(retry_count, factory))
}

/// Progress of a retry session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryState {
    /// An attempt is running or about to start.
    Attempting,
    /// An attempt succeeded. Terminal.
    Succeeded,
    /// The last allowed attempt failed. Terminal.
    Exhausted,
}

/// Future returned by [`retry`].
///
/// It owns the whole session: the factory, the attempt in flight and the
/// failure counter. Dropping it abandons the session.
pub struct Retry<G, F> {
    factory: G,
    future: Option<Pin<Box<F>>>,

    retry_count: usize,
    attempts: usize,
    state: RetryState,
}

impl<G, F> Retry<G, F> {
    fn new(retry_count: usize, factory: G) -> Self {
        Self {
            factory,
            future: None,
            retry_count,
            attempts: 0,
            state: RetryState::Attempting,
        }
    }

    /// Retries performed so far.
    pub fn attempts(&self) -> usize {
        self.attempts
    }

    /// The validated retry budget of this session.
    pub fn retry_count(&self) -> usize {
        self.retry_count
    }

    /// Where the session stands: still attempting, or settled.
    pub fn state(&self) -> RetryState {
        self.state
    }
}

impl<G, F, T, E> Future for Retry<G, F>
where
    G: FnMut() -> F + Unpin,
    F: Future<Output = Result<T, E>>,
{
    type Output = Result<T, E>;

    /// Drives the current attempt.
    ///
    /// A failed attempt with budget left bumps the counter, wakes the
    /// task and returns `Pending`, so the next attempt starts on the
    /// following poll. The executor drives the loop and the stack stays
    /// flat whatever the retry count.
    ///
    /// # Panics
    ///
    /// Panics if polled again after returning `Poll::Ready`.
    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.get_mut();

        if this.state != RetryState::Attempting {
            panic!("`Retry` polled after completion");
        }

        let future = this
            .future
            .get_or_insert_with(|| Box::pin((this.factory)()));

        match future.as_mut().poll(cx) {
            Poll::Pending => Poll::Pending,

            Poll::Ready(Ok(value)) => {
                this.future = None;
                this.state = RetryState::Succeeded;

                debug!(attempts = this.attempts, "operation succeeded");
                Poll::Ready(Ok(value))
            }

            Poll::Ready(Err(err)) => {
                this.future = None;

                if this.attempts >= this.retry_count {
                    this.state = RetryState::Exhausted;

                    warn!(
                        attempts = this.attempts,
                        retry_count = this.retry_count,
                        "retries exhausted, surfacing last error"
                    );
                    return Poll::Ready(Err(err));
                }

                this.attempts += 1;
                debug!(
                    attempt = this.attempts,
                    retry_count = this.retry_count,
                    "operation failed, retrying"
                );

                cx.waker().wake_by_ref();
                Poll::Pending
            }
        }
    }
}
