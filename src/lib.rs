//! # demandflow
//!
//! **Demandflow** is a push-based, demand-regulated stream primitive for Rust.
//!
//! A producer emits elements to a consumer only up to the quantity the
//! consumer has requested. It supports incremental pull (bounded demand) and
//! full drain (unbounded demand), cooperative cancellation, and per-element
//! error isolation. Everything runs synchronously on the calling thread;
//! there are no internal threads or executors. The crate is designed as a
//! building block for higher-level stream combinators.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!     ┌──────────────────────────┐
//!     │  Operator<S: Source>     │   immutable; subscribe many times
//!     │  - Source (Range/Values) │
//!     │  - Config                │
//!     └────────────┬─────────────┘
//!                  │ subscribe(on_next, on_error, on_complete)
//!                  ▼
//!     ┌──────────────────────────┐        request(n) / cancel()
//!     │  Subscription            │ ◄────────────────────────────── any thread
//!     │  - Demand  (atomic)      │
//!     │  - wip     (one drainer) │
//!     │  - terminal + token      │
//!     │  - cursor  (drainer only)│
//!     └────────────┬─────────────┘
//!                  │ drain on the requesting thread
//!                  ▼
//!     ┌──────────────────────────┐
//!     │  Consume<T>              │
//!     │  on_next / on_error /    │
//!     │  on_complete             │
//!     └──────────────────────────┘
//! ```
//!
//! ### Lifecycle
//! ```text
//! Operator ──► subscribe() ──► Subscription (Idle)
//!
//! request(n):
//!   ├─► closed (Completed/Cancelled)?  ─► no-op
//!   ├─► demand += n (saturating at UNBOUNDED)
//!   ├─► another thread draining?       ─► return; that drain picks it up
//!   └─► drain:
//!         loop {
//!           ├─► cancelled?             ─► drop consumer, stop
//!           ├─► position == end?       ─► on_complete() once, drop consumer, stop
//!           ├─► demand == 0?           ─► stop (Idle)
//!           ├─► demand == UNBOUNDED?   ─► emit all remaining, demand = 0
//!           └─► demand -= 1, emit one
//!                 └─ Err / panic       ─► on_error(StreamError), continue
//!         }
//!
//! cancel():  Open ─► Cancelled (idempotent, irrevocable)
//! ```
//!
//! ## Features
//! | Area              | Description                                                   | Key types / traits                          |
//! |-------------------|---------------------------------------------------------------|---------------------------------------------|
//! | **Operators**     | Subscribable sources; paced or all-at-once traversal.         | [`Operator`], [`Source`], [`Range`], [`Values`] |
//! | **Subscriptions** | Demand accounting, single-drainer loop, cancellation.         | [`Subscription`], [`SubscriptionRef`], [`Status`] |
//! | **Consumers**     | Callback capability set; closure triple adapter.              | [`Consume`], [`Callbacks`]                  |
//! | **Errors**        | Per-element failures delivered through the error callback.    | [`StreamError`], [`BoxError`]               |
//! | **Configuration** | Stream name for logs, zero-demand policy.                     | [`Config`]                                  |
//!
//! ## Optional features
//! - `logging`: exports a simple stdout [`LogWriter`] consumer wrapper _(demo/reference only)_.
//!
//! Diagnostics are emitted through [`tracing`](https://docs.rs/tracing); install any
//! subscriber to see them.
//!
//! ## Example
//! ```rust
//! use std::sync::{Arc, Mutex};
//! use demandflow::{BoxError, Operator, StreamError, UNBOUNDED};
//!
//! let seen = Arc::new(Mutex::new(Vec::new()));
//! let sink = Arc::clone(&seen);
//!
//! let sub = Operator::range(0, 5).subscribe(
//!     move |x: i64| {
//!         sink.lock().unwrap().push(x);
//!         Ok::<_, BoxError>(())
//!     },
//!     |err: StreamError| eprintln!("element failed: {err}"),
//!     || println!("done"),
//! );
//!
//! sub.request(2);
//! assert_eq!(*seen.lock().unwrap(), vec![0, 1]);
//!
//! sub.request(UNBOUNDED);
//! assert_eq!(*seen.lock().unwrap(), vec![0, 1, 2, 3, 4]);
//! assert!(sub.is_completed());
//! ```
mod consumers;
mod core;
mod error;
mod sources;

#[cfg(test)]
mod testkit;

// ---- Public re-exports ----

pub use consumers::{Callbacks, Consume};
pub use self::core::{Config, Operator, Status, Subscription, SubscriptionRef, UNBOUNDED};
pub use error::{BoxError, StreamError};
pub use sources::{Range, Source, Values};

// Optional: expose a simple stdout consumer wrapper (demo/reference).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use consumers::LogWriter;
