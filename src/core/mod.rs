//! Runtime core: operators, subscriptions and the drain loop.
//!
//! The public API from this module is [`Operator`], the [`Subscription`]
//! handle trait with [`Status`] and [`UNBOUNDED`], and [`Config`].
//!
//! Internal modules:
//! - [`operator`]: subscribable source; also the unpaced `subscribe_all` traversal;
//! - [`subscription`]: per-activation state machine and single-drainer loop;
//! - [`demand`]: atomic demand counter;
//! - [`emit`]: signal delivery with panic isolation;
//! - [`handle`]: public subscription trait and lifecycle states;
//! - [`config`]: operator configuration.

mod config;
mod demand;
mod emit;
mod handle;
mod operator;
mod subscription;

pub use config::Config;
pub use handle::{Status, Subscription, SubscriptionRef, UNBOUNDED};
pub use operator::Operator;
