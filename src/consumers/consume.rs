//! # Consumer trait.
//!
//! Provides [`Consume`], the receiving side of a subscription.
//!
//! ## Rules
//! - Calls are **sequential**: the active drain is the only caller, so
//!   `&mut self` is never aliased even when `request` races on many threads.
//! - Paced subscriptions call from **any thread** that calls `request`, so
//!   they require the consumer to be `Send`. `subscribe_all` stays on the
//!   calling thread and takes `!Send` consumers too.
//! - A failing element (an `Err` from `on_next`, or a panic) is reported to
//!   `on_error` and the stream continues with the next element.
//! - Panics in `on_error` / `on_complete` are caught and logged; they never
//!   unwind into the caller of `request`.
//! - After `on_complete`, or once cancellation is observed, no further call is made.
//!
//! ## Example
//! ```rust
//! use demandflow::{BoxError, Consume, Operator, StreamError, UNBOUNDED};
//!
//! #[derive(Default)]
//! struct Sum {
//!     total: i64,
//! }
//!
//! impl Consume<i64> for Sum {
//!     fn on_next(&mut self, item: i64) -> Result<(), BoxError> {
//!         self.total += item;
//!         Ok(())
//!     }
//!
//!     fn on_error(&mut self, _error: StreamError) {}
//!
//!     fn on_complete(&mut self) {
//!         println!("total = {}", self.total);
//!     }
//! }
//!
//! let sub = Operator::range(0, 10).subscribe_with(Sum::default());
//! sub.request(UNBOUNDED);
//! assert!(sub.is_completed());
//! ```

use crate::error::{BoxError, StreamError};

/// Receiver of stream signals.
pub trait Consume<T> {
    /// Handles one element.
    ///
    /// Returning `Err` routes a [`StreamError::Element`] for this element to
    /// [`on_error`](Self::on_error); a panic routes [`StreamError::Panicked`].
    fn on_next(&mut self, item: T) -> Result<(), BoxError>;

    /// Handles a failure.
    ///
    /// Element failures do not terminate the stream.
    fn on_error(&mut self, error: StreamError);

    /// Called exactly once when the source is exhausted.
    ///
    /// Never called after cancellation.
    fn on_complete(&mut self);
}

impl<T, C> Consume<T> for Box<C>
where
    C: Consume<T> + ?Sized,
{
    fn on_next(&mut self, item: T) -> Result<(), BoxError> {
        (**self).on_next(item)
    }

    fn on_error(&mut self, error: StreamError) {
        (**self).on_error(error)
    }

    fn on_complete(&mut self) {
        (**self).on_complete()
    }
}
