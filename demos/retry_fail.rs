//! Example: an operation that always fails, with two retries allowed

use iterum::tools::{RetryOptions, retry};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing_subscriber::EnvFilter;

#[iterum::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let attempts = Arc::new(AtomicUsize::new(0));
    let attempts_clone = attempts.clone();

    let session = retry(
        move || {
            let n = attempts_clone.fetch_add(1, Ordering::SeqCst) + 1;
            println!("Attempt {n}");
            async { Err::<(), _>(std::io::Error::other("always fail")) }
        },
        RetryOptions::new().retry_count(2),
    );

    match session {
        Ok(session) => match session.await {
            Ok(()) => println!("success"),
            Err(err) => println!("caught error: {err}"),
        },
        Err(err) => println!("configuration error: {err}"),
    }

    println!("attempts made: {}", attempts.load(Ordering::SeqCst));
}
