//! # Example: concurrent_demand
//!
//! Demonstrates demand arriving from many threads at once.
//!
//! Shows how to:
//! - Share a [`SubscriptionRef`] across tokio blocking tasks
//! - Issue `request(n)` concurrently; only one caller drains at a time, the
//!   others record their demand and return
//! - Observe diagnostics through `tracing`
//!
//! ## Flow
//! ```text
//! main()
//!   ├─► Operator::range(0, 1000).subscribe(...)
//!   ├─► spawn 8 × spawn_blocking { 25 × request(5) }
//!   │     ├─► first caller becomes the drainer
//!   │     └─► others: demand += 5, return
//!   └─► join all
//!         └─► verify 1000 elements, in order, one completion
//! ```
//!
//! ## Run
//! ```bash
//! RUST_LOG=demandflow=debug cargo run --example concurrent_demand
//! ```

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use demandflow::{BoxError, Config, Operator, StreamError};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "multi_thread", worker_threads = 4)]
async fn main() -> anyhow::Result<()> {
    // 1. Diagnostics
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // 2. Subscribe, recording what arrives
    let seen = Arc::new(Mutex::new(Vec::with_capacity(1000)));
    let completions = Arc::new(AtomicUsize::new(0));

    let sub = {
        let seen = Arc::clone(&seen);
        let completions = Arc::clone(&completions);
        Operator::range(0, 1000)
            .with_config(Config::named("concurrent"))
            .subscribe(
                move |x: i64| {
                    seen.lock().expect("seen lock").push(x);
                    Ok::<_, BoxError>(())
                },
                |err: StreamError| eprintln!("[error] {err}"),
                move || {
                    completions.fetch_add(1, Ordering::SeqCst);
                },
            )
    };

    // 3. Request from many threads at once
    let mut handles = Vec::new();
    for _ in 0..8 {
        let sub = Arc::clone(&sub);
        handles.push(tokio::task::spawn_blocking(move || {
            for _ in 0..25 {
                sub.request(5);
            }
        }));
    }
    for h in handles {
        h.await?;
    }

    // 4. Verify
    let seen = seen.lock().expect("seen lock");
    let in_order = seen.windows(2).all(|w| w[0] + 1 == w[1]);
    println!(
        "received={} in_order={} completions={} status={:?}",
        seen.len(),
        in_order,
        completions.load(Ordering::SeqCst),
        sub.status()
    );
    Ok(())
}
