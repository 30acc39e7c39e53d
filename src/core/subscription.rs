//! # Demand-driven subscription.
//!
//! [`DemandSubscription`] is the per-activation state behind a
//! [`SubscriptionRef`](crate::SubscriptionRef): outstanding demand, the
//! position cursor, and liveness.
//!
//! ## Architecture
//! ```text
//! request(n) ──► Demand::add(n) ──► drain()
//!                                     │
//!                     wip.fetch_add(1) != 0 ──► return (active drain picks it up)
//!                                     │
//!                                     ▼ (sole drainer)
//!                     loop {
//!                       lock cursor ──► drain_pass()
//!                       wip -= missed; break if wip == 0
//!                     }
//!
//! drain_pass():
//!   loop {
//!     ├─► closed?            ──► release consumer, return
//!     ├─► position == end?   ──► CAS Open → Completed, on_complete(), return
//!     ├─► demand == 0?       ──► return
//!     ├─► demand UNBOUNDED?  ──► emit all remaining, reset demand to 0
//!     └─► consume 1 demand, advance position, on_next(item)
//!                                               └─ failure ──► on_error(err)
//!   }
//! ```
//!
//! ## Rules
//! - **Single drainer**: `wip` admits one drainer at a time. Other callers,
//!   including re-entrant calls from inside a callback, record demand and return.
//! - **Cursor ownership**: the position and the consumer live behind a mutex
//!   that only the drainer locks, so it is never contended by `request`.
//! - **Liveness**: checked before every element, not only at entry.
//! - **Terminal**: one atomic, `Open → Completed | Cancelled` by CAS; the first wins.
//! - On a terminal state the consumer is dropped.
//! - **No unwinding**: source and consumer code run under `catch_unwind`;
//!   if a drain still unwinds, `wip` is cleared so the subscription is not
//!   stuck in `Draining`.

use std::sync::atomic::{AtomicBool, AtomicU8, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio_util::sync::CancellationToken;

use crate::consumers::Consume;
use crate::core::config::Config;
use crate::core::demand::Demand;
use crate::core::emit::{deliver, signal_complete, signal_error};
use crate::core::handle::{Status, Subscription, UNBOUNDED};
use crate::error::StreamError;
use crate::sources::Source;

const OPEN: u8 = 0;
const COMPLETED: u8 = 1;
const CANCELLED: u8 = 2;

/// State owned by the active drainer.
struct Cursor<C> {
    /// Next position to emit; never exceeds the source length.
    position: u64,
    /// `None` once a terminal state was reached.
    consumer: Option<C>,
}

/// Subscription over a [`Source`] pushing into a [`Consume`] implementation.
pub(crate) struct DemandSubscription<S, C> {
    source: Arc<S>,
    /// Source length, read once; the source is immutable.
    end: u64,
    config: Arc<Config>,
    demand: Demand,
    /// Drain requests not yet served; non-zero while a drainer is active.
    wip: AtomicUsize,
    terminal: AtomicU8,
    /// Set by a zero-demand request in strict mode; served by the drainer.
    invalid_demand: AtomicBool,
    token: CancellationToken,
    cursor: Mutex<Cursor<C>>,
}

impl<S, C> DemandSubscription<S, C>
where
    S: Source,
    C: Consume<S::Item>,
{
    /// Creates an idle subscription.
    ///
    /// `token` is the liveness flag; pass a child token to tie the
    /// subscription to an outer cancellation scope.
    pub(crate) fn new(
        source: Arc<S>,
        config: Arc<Config>,
        consumer: C,
        token: CancellationToken,
    ) -> Self {
        Self {
            end: source.len(),
            source,
            config,
            demand: Demand::new(),
            wip: AtomicUsize::new(0),
            terminal: AtomicU8::new(OPEN),
            invalid_demand: AtomicBool::new(false),
            token,
            cursor: Mutex::new(Cursor {
                position: 0,
                consumer: Some(consumer),
            }),
        }
    }

    #[inline]
    fn stream(&self) -> &str {
        self.config.name()
    }

    /// Returns the terminal state, folding in an observed token cancellation.
    fn terminal(&self) -> u8 {
        let current = self.terminal.load(Ordering::Acquire);
        if current != OPEN || !self.token.is_cancelled() {
            return current;
        }
        match self
            .terminal
            .compare_exchange(OPEN, CANCELLED, Ordering::AcqRel, Ordering::Acquire)
        {
            Ok(_) => CANCELLED,
            Err(actual) => actual,
        }
    }

    #[inline]
    fn is_open(&self) -> bool {
        self.terminal() == OPEN
    }

    fn lock_cursor(&self) -> MutexGuard<'_, Cursor<C>> {
        self.cursor.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Becomes the drainer, or records a missed pass for the current one.
    fn drain(&self) {
        if self.wip.fetch_add(1, Ordering::AcqRel) != 0 {
            return;
        }

        let _reset = WipReset(&self.wip);
        let mut missed = 1;
        loop {
            {
                let mut cursor = self.lock_cursor();
                self.drain_pass(&mut cursor);
            }
            missed = self.wip.fetch_sub(missed, Ordering::AcqRel) - missed;
            if missed == 0 {
                break;
            }
        }
    }

    /// Emits while open, not exhausted, and demand remains.
    fn drain_pass(&self, cursor: &mut Cursor<C>) {
        let end = self.end;

        if self.invalid_demand.swap(false, Ordering::AcqRel) {
            self.reject_demand(cursor);
        }

        loop {
            if !self.is_open() {
                self.release(cursor);
                return;
            }
            if cursor.position >= end {
                self.complete(cursor);
                return;
            }

            let pending = self.demand.pending();
            if pending == 0 {
                return;
            }
            if pending == UNBOUNDED {
                self.drain_all(cursor, end);
                continue;
            }
            if !self.demand.try_consume() {
                return;
            }

            let position = cursor.position;
            cursor.position += 1;
            self.emit(cursor, position);
        }
    }

    /// Full drain: no per-element demand accounting, stops only on cancellation.
    fn drain_all(&self, cursor: &mut Cursor<C>, end: u64) {
        tracing::debug!(
            stream = self.stream(),
            from = cursor.position,
            end,
            "unbounded demand, draining remaining elements"
        );
        while cursor.position < end && self.is_open() {
            let position = cursor.position;
            cursor.position += 1;
            self.emit(cursor, position);
        }
        self.demand.reset_unbounded();
    }

    fn emit(&self, cursor: &mut Cursor<C>, position: u64) {
        let Some(consumer) = cursor.consumer.as_mut() else {
            return;
        };
        let source = &self.source;
        if let Err(err) = deliver(consumer, position, || source.at(position)) {
            // a callback that cancelled its own subscription gets no error
            if self.is_open() {
                signal_error::<S::Item, C>(consumer, self.stream(), err);
            }
        }
    }

    fn complete(&self, cursor: &mut Cursor<C>) {
        let won = self.is_open()
            && self
                .terminal
                .compare_exchange(OPEN, COMPLETED, Ordering::AcqRel, Ordering::Acquire)
                .is_ok();
        if !won {
            self.release(cursor);
            return;
        }
        if let Some(mut consumer) = cursor.consumer.take() {
            signal_complete::<S::Item, C>(&mut consumer, self.stream());
        }
    }

    fn reject_demand(&self, cursor: &mut Cursor<C>) {
        if !self.is_open() {
            return;
        }
        if let Some(consumer) = cursor.consumer.as_mut() {
            signal_error::<S::Item, C>(
                consumer,
                self.stream(),
                StreamError::InvalidDemand { requested: 0 },
            );
        }
        self.cancel_open();
    }

    /// Drops the consumer after cancellation.
    fn release(&self, cursor: &mut Cursor<C>) {
        if cursor.consumer.take().is_some() {
            tracing::debug!(
                stream = self.stream(),
                position = cursor.position,
                "subscription cancelled"
            );
        }
    }

    /// Moves `Open → Cancelled`; returns false if already terminal.
    fn cancel_open(&self) -> bool {
        let won = self
            .terminal
            .compare_exchange(OPEN, CANCELLED, Ordering::AcqRel, Ordering::Acquire)
            .is_ok();
        if won {
            self.token.cancel();
        }
        won
    }
}

/// Clears `wip` when a drain unwinds.
struct WipReset<'a>(&'a AtomicUsize);

impl Drop for WipReset<'_> {
    fn drop(&mut self) {
        if std::thread::panicking() {
            self.0.store(0, Ordering::Release);
        }
    }
}

impl<S, C> Subscription for DemandSubscription<S, C>
where
    S: Source,
    C: Consume<S::Item> + Send,
{
    fn request(&self, n: u64) {
        if !self.is_open() {
            return;
        }
        if n == 0 {
            if self.config.strict_demand {
                self.invalid_demand.store(true, Ordering::Release);
                self.drain();
            }
            return;
        }

        let total = self.demand.add(n);
        tracing::trace!(stream = self.stream(), n, total, "demand requested");
        self.drain();
    }

    fn cancel(&self) {
        if self.cancel_open() {
            // releases the consumer now unless another thread is draining
            self.drain();
        }
    }

    fn status(&self) -> Status {
        match self.terminal() {
            COMPLETED => Status::Completed,
            CANCELLED => Status::Cancelled,
            _ if self.wip.load(Ordering::Acquire) != 0 => Status::Draining,
            _ => Status::Idle,
        }
    }

    fn requested(&self) -> u64 {
        self.demand.pending()
    }
}
