//! # Deliver signals to a consumer with panic isolation.
//!
//! Shared by the demand-driven drain and by [`Operator::subscribe_all`](crate::Operator::subscribe_all).
//!
//! ## Signal flow
//! ```text
//! deliver(pos, fetch):
//!   fetch()       → panic    → Err(StreamError::Panicked { pos, msg })
//!   on_next(item) → Ok(())   → Ok
//!                 → Err(e)   → Err(StreamError::Element { pos, e })
//!                 → panic    → Err(StreamError::Panicked { pos, msg })
//!
//! signal_error(err) / signal_complete():
//!   on_error / on_complete → panic caught, logged with tracing::warn!
//! ```
//!
//! ## Rules
//! - Nothing in here unwinds into the caller.
//! - Whether an error is delivered at all (liveness) is decided by the caller.

use std::panic::{AssertUnwindSafe, catch_unwind};

use crate::consumers::Consume;
use crate::error::StreamError;

/// Fetches and delivers one element, converting a returned error or a panic
/// (from the source or the consumer) into a [`StreamError`].
pub(crate) fn deliver<T, C, G>(
    consumer: &mut C,
    position: u64,
    fetch: G,
) -> Result<(), StreamError>
where
    C: Consume<T> + ?Sized,
    G: FnOnce() -> T,
{
    match catch_unwind(AssertUnwindSafe(|| consumer.on_next(fetch()))) {
        Ok(Ok(())) => Ok(()),
        Ok(Err(source)) => Err(StreamError::Element { position, source }),
        Err(payload) => Err(StreamError::from_panic(position, payload.as_ref())),
    }
}

/// Routes `error` to the consumer's error callback.
pub(crate) fn signal_error<T, C>(consumer: &mut C, stream: &str, error: StreamError)
where
    C: Consume<T> + ?Sized,
{
    tracing::warn!(
        stream,
        label = error.as_label(),
        position = error.position(),
        "stream error: {error}"
    );
    if catch_unwind(AssertUnwindSafe(|| consumer.on_error(error))).is_err() {
        tracing::warn!(stream, "error callback panicked");
    }
}

/// Invokes the consumer's completion callback.
pub(crate) fn signal_complete<T, C>(consumer: &mut C, stream: &str)
where
    C: Consume<T> + ?Sized,
{
    tracing::debug!(stream, "stream completed");
    if catch_unwind(AssertUnwindSafe(|| consumer.on_complete())).is_err() {
        tracing::warn!(stream, "completion callback panicked");
    }
}
