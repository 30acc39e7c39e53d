//! # Subscription handle.
//!
//! This module defines the [`Subscription`] trait, the two-method control
//! surface (`request`, `cancel`) a consumer drives, and the shared handle
//! type [`SubscriptionRef`], an `Arc<dyn Subscription>` that can be handed
//! to other threads.
//!
//! ## State machine
//! ```text
//!            request(n)                  position == end
//!   Idle ───────────────► Draining ─────────────────────► Completed
//!    ▲                     │  ▲ │
//!    └──── demand == 0 ────┘  └─┘ demand > 0
//!
//!   Idle | Draining ── cancel() / parent token ──► Cancelled
//! ```
//! `Completed` and `Cancelled` are terminal and mutually exclusive.

use std::sync::Arc;

/// Unbounded demand sentinel.
///
/// Requesting it switches the subscription to a full drain: every remaining
/// element is emitted without per-element demand accounting. Demand sums
/// saturate at this value, so a saturated sum is unbounded as well.
pub const UNBOUNDED: u64 = u64::MAX;

/// Observable lifecycle of a subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Open, no drain in progress.
    Idle,
    /// Open, a drain is running on some thread.
    Draining,
    /// Source exhausted and completion delivered (terminal).
    Completed,
    /// Cancelled before completion (terminal).
    Cancelled,
}

impl Status {
    /// True for `Completed` and `Cancelled`.
    pub fn is_terminal(self) -> bool {
        matches!(self, Status::Completed | Status::Cancelled)
    }
}

/// # Demand-regulated subscription.
///
/// Obtained from [`Operator::subscribe`](crate::Operator::subscribe). No
/// element is emitted until demand is requested.
///
/// ### Rules
/// - `request` and `cancel` never fail and never unwind; failures reach the
///   consumer's error callback.
/// - Both are safe to call from many threads at once, and from inside the
///   consumer's own callbacks.
/// - After a terminal state both are silent no-ops.
pub trait Subscription: Send + Sync {
    /// Signals willingness to accept `n` more elements.
    ///
    /// Emits synchronously on the calling thread, unless another thread is
    /// already draining; then the demand is recorded and picked up by that drain.
    /// `n == UNBOUNDED` drains everything that is left.
    fn request(&self, n: u64);

    /// Stops emission. Idempotent and irrevocable.
    ///
    /// A drain in progress on another thread stops at its next iteration
    /// boundary, so at most one more element may be delivered after this returns.
    fn cancel(&self);

    /// Current lifecycle state.
    fn status(&self) -> Status;

    /// Outstanding demand (`UNBOUNDED` during a full drain).
    fn requested(&self) -> u64;

    /// True once cancelled.
    fn is_cancelled(&self) -> bool {
        self.status() == Status::Cancelled
    }

    /// True once completion was delivered.
    fn is_completed(&self) -> bool {
        self.status() == Status::Completed
    }
}

/// Shared handle to a subscription (`Arc<dyn Subscription>`).
pub type SubscriptionRef = Arc<dyn Subscription>;
