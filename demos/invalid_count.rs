//! Example: an out-of-range retry count is rejected before any attempt

use iterum::tools::{RetryOptions, retry};
use std::cell::Cell;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let calls = Cell::new(0);

    let session = retry(
        || {
            calls.set(calls.get() + 1);
            async { Ok::<_, ()>("ok") }
        },
        RetryOptions::new().retry_count(0),
    );

    match session {
        Ok(_) => println!("NO ERROR"),
        Err(err) => println!("CAUGHT ERROR: {err}"),
    }

    println!("operation invoked {} times", calls.get());
}
