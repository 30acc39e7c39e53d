//! # Operator: subscribable source.
//!
//! [`Operator`] pairs a [`Source`] with a [`Config`]. It holds no
//! per-subscription state and may be subscribed any number of times; each
//! call yields an independent subscription with its own cursor and demand.
//!
//! ## Entry points
//! ```text
//! subscribe(on_next, on_error, on_complete) ─┐
//! subscribe_with(consumer)                   ├─► SubscriptionRef (paced by request(n))
//! subscribe_scoped(consumer, &parent_token) ─┘
//!
//! subscribe_all(on_next, on_error, on_complete) ─┐
//! subscribe_all_with(consumer)                   ┴─► synchronous full traversal, no demand accounting
//! ```
//!
//! ## Example
//! ```rust
//! use demandflow::{BoxError, Operator, StreamError};
//!
//! let numbers = Operator::range(0, 5);
//!
//! let sub = numbers.subscribe(
//!     |x: i64| {
//!         println!("got {x}");
//!         Ok::<_, BoxError>(())
//!     },
//!     |err: StreamError| eprintln!("{err}"),
//!     || println!("done"),
//! );
//!
//! sub.request(2); // prints 0, 1
//! sub.request(10); // prints 2, 3, 4, then "done"
//! assert!(sub.is_completed());
//! ```

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::consumers::{Callbacks, Consume};
use crate::core::config::Config;
use crate::core::emit::{deliver, signal_complete, signal_error};
use crate::core::handle::SubscriptionRef;
use crate::core::subscription::DemandSubscription;
use crate::error::{BoxError, StreamError};
use crate::sources::{Range, Source, Values};

/// Subscribable, immutable data source.
pub struct Operator<S> {
    source: Arc<S>,
    config: Arc<Config>,
}

impl<S> Clone for Operator<S> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
            config: Arc::clone(&self.config),
        }
    }
}

impl Operator<Range> {
    /// Operator over the numeric range `[start, end)`.
    pub fn range(start: i64, end: i64) -> Self {
        Self::new(Range::new(start, end))
    }
}

impl<T> Operator<Values<T>>
where
    T: Clone + Send + Sync + 'static,
{
    /// Operator over a fixed list of values.
    pub fn from_values(values: impl Into<Arc<[T]>>) -> Self {
        Self::new(Values::new(values))
    }
}

impl<S: Source> Operator<S> {
    /// Creates an operator with the default [`Config`].
    pub fn new(source: S) -> Self {
        Self {
            source: Arc::new(source),
            config: Arc::new(Config::default()),
        }
    }

    /// Replaces the configuration for subscriptions created from now on.
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Arc::new(config);
        self
    }

    /// Returns the source description.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Returns the configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Subscribes with three callbacks.
    ///
    /// Nothing is emitted until the returned subscription receives demand.
    pub fn subscribe<N, Err, E, F>(
        &self,
        on_next: N,
        on_error: E,
        on_complete: F,
    ) -> SubscriptionRef
    where
        N: FnMut(S::Item) -> Result<(), Err> + Send + 'static,
        Err: Into<BoxError>,
        E: FnMut(StreamError) + Send + 'static,
        F: FnMut() + Send + 'static,
    {
        self.subscribe_with(Callbacks::new(on_next, on_error, on_complete))
    }

    /// Subscribes with a [`Consume`] implementation.
    ///
    /// The consumer is called on whichever thread calls `request`, hence `Send`.
    pub fn subscribe_with<C>(&self, consumer: C) -> SubscriptionRef
    where
        C: Consume<S::Item> + Send + 'static,
    {
        self.activate(consumer, CancellationToken::new())
    }

    /// Subscribes inside an outer cancellation scope.
    ///
    /// Cancelling `parent` cancels the subscription; cancelling the
    /// subscription leaves `parent` untouched.
    pub fn subscribe_scoped<C>(
        &self,
        consumer: C,
        parent: &CancellationToken,
    ) -> SubscriptionRef
    where
        C: Consume<S::Item> + Send + 'static,
    {
        self.activate(consumer, parent.child_token())
    }

    fn activate<C>(&self, consumer: C, token: CancellationToken) -> SubscriptionRef
    where
        C: Consume<S::Item> + Send + 'static,
    {
        tracing::debug!(
            stream = self.config.name(),
            len = self.source.len(),
            "subscribed"
        );
        Arc::new(DemandSubscription::new(
            Arc::clone(&self.source),
            Arc::clone(&self.config),
            consumer,
            token,
        ))
    }

    /// Emits every element synchronously, bypassing demand accounting.
    ///
    /// Reserved for a single consumer that never needs pacing. A failing
    /// element is reported to `on_error` and the traversal continues;
    /// `on_complete` runs once at the end, unconditionally. Everything runs
    /// on the calling thread, so the closures need not be `Send`.
    pub fn subscribe_all<N, Err, E, F>(&self, on_next: N, on_error: E, on_complete: F)
    where
        N: FnMut(S::Item) -> Result<(), Err>,
        Err: Into<BoxError>,
        E: FnMut(StreamError),
        F: FnMut(),
    {
        self.subscribe_all_with(Callbacks::new(on_next, on_error, on_complete))
    }

    /// [`subscribe_all`](Self::subscribe_all) with a [`Consume`] implementation.
    pub fn subscribe_all_with<C>(&self, mut consumer: C)
    where
        C: Consume<S::Item>,
    {
        let stream = self.config.name();
        let end = self.source.len();
        tracing::debug!(stream, len = end, "traversing all elements");

        for position in 0..end {
            if let Err(err) = deliver(&mut consumer, position, || self.source.at(position)) {
                signal_error::<S::Item, C>(&mut consumer, stream, err);
            }
        }
        signal_complete::<S::Item, C>(&mut consumer, stream);
    }
}
