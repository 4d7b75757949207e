//! Example: retries stop at the configured bound
//!
//! Every attempt fails with a numbered error. With `retry_count = 2`
//! the session gives up after three invocations and surfaces the last
//! error.

use iterum::tools::{RetryOptions, retry};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing_subscriber::EnvFilter;

#[iterum::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let counter = Arc::new(AtomicUsize::new(0));
    let counter_clone = counter.clone();

    let failing = move || {
        let n = counter_clone.fetch_add(1, Ordering::SeqCst) + 1;
        async move { Err::<(), _>(format!("always fail {n}")) }
    };

    let result = match retry(failing, RetryOptions::new().retry_count(2)) {
        Ok(session) => session.await,
        Err(err) => {
            eprintln!("configuration error: {err}");
            return;
        }
    };

    if let Err(err) = result {
        println!("final error: {err}");
    }

    let invocations = counter.load(Ordering::SeqCst);
    println!("invocations = {invocations}");

    if invocations > 3 {
        println!("=> retried beyond retry_count");
    } else {
        println!("=> retries stayed within retry_count");
    }
}
