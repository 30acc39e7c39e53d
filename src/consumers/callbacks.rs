//! # Closure-backed consumer (`Callbacks`)
//!
//! [`Callbacks`] bundles three closures into a [`Consume`] implementation.
//! This is what [`Operator::subscribe`](crate::Operator::subscribe) builds
//! from its arguments.
//!
//! ## Example
//! ```rust
//! use demandflow::{BoxError, Callbacks, Consume, StreamError};
//!
//! let mut seen = Vec::new();
//! let mut c = Callbacks::new(
//!     |x: i64| {
//!         seen.push(x);
//!         Ok::<_, BoxError>(())
//!     },
//!     |err: StreamError| eprintln!("{err}"),
//!     || println!("done"),
//! );
//! c.on_next(1).unwrap();
//! drop(c);
//! assert_eq!(seen, vec![1]);
//! ```

use std::fmt;

use crate::consumers::Consume;
use crate::error::{BoxError, StreamError};

/// Function-backed consumer.
pub struct Callbacks<N, E, F> {
    on_next: N,
    on_error: E,
    on_complete: F,
}

impl<N, E, F> Callbacks<N, E, F> {
    /// Creates a consumer from an element, error and completion closure.
    pub fn new(on_next: N, on_error: E, on_complete: F) -> Self {
        Self {
            on_next,
            on_error,
            on_complete,
        }
    }
}

impl<N, E, F> fmt::Debug for Callbacks<N, E, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callbacks").finish_non_exhaustive()
    }
}

impl<T, Err, N, E, F> Consume<T> for Callbacks<N, E, F>
where
    N: FnMut(T) -> Result<(), Err>,
    Err: Into<BoxError>,
    E: FnMut(StreamError),
    F: FnMut(),
{
    fn on_next(&mut self, item: T) -> Result<(), BoxError> {
        (self.on_next)(item).map_err(Into::into)
    }

    fn on_error(&mut self, error: StreamError) {
        (self.on_error)(error)
    }

    fn on_complete(&mut self) {
        (self.on_complete)()
    }
}
