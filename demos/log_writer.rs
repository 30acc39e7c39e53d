//! # Example: log_writer
//!
//! Demonstrates the built-in stdout [`LogWriter`] and per-element error isolation.
//!
//! Shows how to:
//! - Wrap a consumer in [`LogWriter`] (requires the `logging` feature)
//! - Fail a single element; the stream continues and still completes
//! - Traverse without pacing via `subscribe_all_with`
//!
//! ## Run
//! ```bash
//! cargo run --example log_writer --features logging
//! ```

use demandflow::{BoxError, Callbacks, LogWriter, Operator, StreamError, UNBOUNDED};

fn main() -> anyhow::Result<()> {
    let numbers = Operator::range(0, 5);

    // 1. Paced subscription; element 3 fails
    let inner = Callbacks::new(
        |x: i64| {
            if x == 3 {
                return Err(BoxError::from("three is unlucky"));
            }
            Ok(())
        },
        |_: StreamError| {},
        || {},
    );
    let sub = numbers.subscribe_with(LogWriter::new("paced", inner));
    sub.request(2);
    sub.request(UNBOUNDED);

    // 2. Unpaced traversal of the same operator
    let inner = Callbacks::new(|_: i64| Ok::<_, BoxError>(()), |_: StreamError| {}, || {});
    numbers.subscribe_all_with(LogWriter::new("all", inner));
    Ok(())
}
