//! # Stream consumers.
//!
//! This module provides the [`Consume`] trait, the capability set a
//! subscription pushes into, and built-in implementations.
//!
//! ## Signals
//! ```text
//! Subscription ── drain ──► Consume::on_next(item)     zero or more times
//!                      ├──► Consume::on_error(err)     zero or more times (per element)
//!                      └──► Consume::on_complete()     at most once, last
//! ```
//!
//! ## Implementations
//! - [`Callbacks`] - closure triple (`on_next`, `on_error`, `on_complete`)
//! - [`LogWriter`] - stdout logging wrapper (feature `logging`, demo/reference only)

mod callbacks;
mod consume;
#[cfg(feature = "logging")]
mod log;

pub use callbacks::Callbacks;
pub use consume::Consume;
#[cfg(feature = "logging")]
pub use log::LogWriter;
