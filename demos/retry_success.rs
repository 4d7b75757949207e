//! Example: an operation that succeeds on its first attempt
//!
//! Run with `RUST_LOG=iterum=debug` to see the session trace.

use iterum::tools::{RetryOptions, retry};
use tracing_subscriber::EnvFilter;

#[iterum::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let session = match retry(|| async { Ok::<_, String>("ok") }, RetryOptions::default()) {
        Ok(session) => session,
        Err(err) => {
            eprintln!("error: {err}");
            return;
        }
    };

    match session.await {
        Ok(res) => println!("success: {res}"),
        Err(err) => eprintln!("error: {err}"),
    }
}
