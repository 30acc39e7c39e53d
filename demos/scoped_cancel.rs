//! # Example: scoped_cancel
//!
//! Demonstrates cancelling subscriptions from an outer scope.
//!
//! Shows how to:
//! - Tie several subscriptions to one parent [`CancellationToken`]
//! - Cancel them all at once from another task
//! - Observe that cancellation is irrevocable: later demand is ignored
//!
//! ## Flow
//! ```text
//! main()
//!   ├─► parent = CancellationToken::new()
//!   ├─► subscribe_scoped(fast, &parent), subscribe_scoped(slow, &parent)
//!   ├─► ticker task: every 50ms request(1) on both
//!   ├─► sleep 300ms ─► parent.cancel()
//!   │     └─► both subscriptions: Cancelled
//!   └─► request(100) ─► no-op
//! ```
//!
//! ## Run
//! ```bash
//! cargo run --example scoped_cancel
//! ```

use std::time::Duration;

use demandflow::{BoxError, Callbacks, Operator, StreamError, SubscriptionRef};
use tokio_util::sync::CancellationToken;

fn printer(name: &'static str) -> impl demandflow::Consume<i64> + Send + 'static {
    Callbacks::new(
        move |x: i64| {
            println!("[{name}] next {x}");
            Ok::<_, BoxError>(())
        },
        move |err: StreamError| eprintln!("[{name}] error {err}"),
        move || println!("[{name}] complete"),
    )
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // 1. One scope for every subscription of this "session"
    let parent = CancellationToken::new();
    let numbers = Operator::range(0, 1_000);

    let subs: Vec<SubscriptionRef> = vec![
        numbers.subscribe_scoped(printer("a"), &parent),
        numbers.subscribe_scoped(printer("b"), &parent),
    ];

    // 2. Pull one element per tick until the scope is cancelled
    let ticker = {
        let subs = subs.clone();
        let parent = parent.clone();
        tokio::spawn(async move {
            let mut tick = tokio::time::interval(Duration::from_millis(50));
            loop {
                tokio::select! {
                    _ = parent.cancelled() => break,
                    _ = tick.tick() => {
                        for sub in &subs {
                            sub.request(1);
                        }
                    }
                }
            }
        })
    };

    // 3. Cancel the whole scope
    tokio::time::sleep(Duration::from_millis(300)).await;
    parent.cancel();
    ticker.await?;

    // 4. Cancellation is irrevocable
    for sub in &subs {
        sub.request(100);
        println!("status: {:?}", sub.status());
    }
    Ok(())
}
