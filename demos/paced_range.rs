//! # Example: paced_range
//!
//! Minimal example of a consumer pulling a numeric range in small batches.
//!
//! Demonstrates how to:
//! - Build an [`Operator`] over a range.
//! - Subscribe with three callbacks.
//! - Pace delivery with bounded `request(n)` calls, then drain the rest with [`UNBOUNDED`].
//!
//! ## Flow
//! ```text
//! Operator::range(0, 10) ──► subscribe()
//!     ├─► request(3)          ─► on_next 0, 1, 2
//!     ├─► request(3)          ─► on_next 3, 4, 5
//!     ├─► request(UNBOUNDED)  ─► on_next 6..9
//!     │                       ─► on_complete
//!     └─► request(1)          ─► no-op (completed)
//! ```
//!
//! ## Run
//! ```bash
//! cargo run --example paced_range
//! ```

use demandflow::{BoxError, Operator, StreamError, UNBOUNDED};

fn main() -> anyhow::Result<()> {
    // 1. Describe the source (nothing runs yet)
    let numbers = Operator::range(0, 10);

    // 2. Subscribe; no element is emitted until demand arrives
    let sub = numbers.subscribe(
        |x: i64| {
            println!("[next] {x}");
            Ok::<_, BoxError>(())
        },
        |err: StreamError| eprintln!("[error] {err}"),
        || println!("[complete]"),
    );
    println!("status after subscribe: {:?}", sub.status());

    // 3. Pull in batches
    for batch in 1..=2 {
        println!("-- batch {batch}");
        sub.request(3);
        println!("status: {:?} requested={}", sub.status(), sub.requested());
    }

    // 4. Drain everything that is left
    println!("-- drain");
    sub.request(UNBOUNDED);
    println!("status: {:?}", sub.status());

    // 5. Further demand is ignored
    sub.request(1);
    Ok(())
}
