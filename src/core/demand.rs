//! # Atomic demand counter.
//!
//! [`Demand`] is the only subscription field touched by many threads without
//! coordination. Every mutation is an atomic read-modify-write:
//!
//! ```text
//! request(n)      ──► add(n)            saturating CAS loop, caps at UNBOUNDED
//! bounded emit    ──► try_consume()     CAS decrement, skipped when 0 or UNBOUNDED
//! full drain done ──► reset_unbounded() CAS UNBOUNDED → 0
//! ```
//!
//! ## Rules
//! - The counter never wraps: sums saturate at [`UNBOUNDED`].
//! - Once it reaches [`UNBOUNDED`] it stays there until `reset_unbounded`.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::core::UNBOUNDED;

/// Outstanding demand of one subscription.
#[derive(Debug, Default)]
pub(crate) struct Demand {
    pending: AtomicU64,
}

impl Demand {
    /// Creates a counter with no demand.
    pub(crate) fn new() -> Self {
        Self {
            pending: AtomicU64::new(0),
        }
    }

    /// Adds `n` to the outstanding demand, saturating at [`UNBOUNDED`].
    ///
    /// Returns the new value.
    pub(crate) fn add(&self, n: u64) -> u64 {
        let mut current = self.pending.load(Ordering::Acquire);
        loop {
            let next = current.saturating_add(n);
            match self.pending.compare_exchange_weak(
                current,
                next,
                Ordering::AcqRel,
                Ordering::Acquire,
            ) {
                Ok(_) => return next,
                Err(actual) => current = actual,
            }
        }
    }

    /// Returns the current outstanding demand.
    #[inline]
    pub(crate) fn pending(&self) -> u64 {
        self.pending.load(Ordering::Acquire)
    }

    /// Consumes one unit of demand.
    ///
    /// Returns `false` if there was none. Unbounded demand is never decremented.
    pub(crate) fn try_consume(&self) -> bool {
        let mut current = self.pending.load(Ordering::Acquire);
        loop {
            if current == 0 {
                return false;
            }
            if current == UNBOUNDED {
                return true;
            }
            match self.pending.compare_exchange_weak(
                current,
                current - 1,
                Ordering::AcqRel,
                Ordering::Acquire,
            ) {
                Ok(_) => return true,
                Err(actual) => current = actual,
            }
        }
    }

    /// Zeroes the counter after a full drain.
    ///
    /// Only succeeds if the counter still holds [`UNBOUNDED`].
    pub(crate) fn reset_unbounded(&self) -> bool {
        self.pending
            .compare_exchange(UNBOUNDED, 0, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_accumulates() {
        let d = Demand::new();
        assert_eq!(d.add(2), 2);
        assert_eq!(d.add(3), 5);
        assert_eq!(d.pending(), 5);
    }

    #[test]
    fn test_add_saturates_at_unbounded() {
        let d = Demand::new();
        d.add(u64::MAX - 1);
        assert_eq!(d.add(10), UNBOUNDED);
        assert_eq!(d.add(1), UNBOUNDED);
    }

    #[test]
    fn test_consume_decrements_until_zero() {
        let d = Demand::new();
        d.add(2);
        assert!(d.try_consume());
        assert!(d.try_consume());
        assert!(!d.try_consume());
        assert_eq!(d.pending(), 0);
    }

    #[test]
    fn test_unbounded_is_not_decremented() {
        let d = Demand::new();
        d.add(UNBOUNDED);
        for _ in 0..100 {
            assert!(d.try_consume());
        }
        assert_eq!(d.pending(), UNBOUNDED);
    }

    #[test]
    fn test_reset_only_from_unbounded() {
        let d = Demand::new();
        d.add(7);
        assert!(!d.reset_unbounded());
        assert_eq!(d.pending(), 7);

        d.add(UNBOUNDED);
        assert!(d.reset_unbounded());
        assert_eq!(d.pending(), 0);
    }

    #[test]
    fn test_concurrent_adds_are_not_lost() {
        let d = Demand::new();
        std::thread::scope(|s| {
            for _ in 0..8 {
                s.spawn(|| {
                    for _ in 0..1000 {
                        d.add(1);
                    }
                });
            }
        });
        assert_eq!(d.pending(), 8000);
    }
}
