//! # Numeric range source.

use super::Source;

/// Half-open range `[start, end)` of `i64` values.
///
/// A range with `end <= start` is empty.
///
/// # Example
/// ```
/// use demandflow::{Range, Source};
///
/// let r = Range::new(-2, 3);
/// assert_eq!(r.len(), 5);
/// assert_eq!(r.at(0), -2);
/// assert_eq!(r.at(4), 2);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Range {
    start: i64,
    end: i64,
}

impl Range {
    /// Creates a new range `[start, end)`.
    pub fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }

    /// Inclusive lower bound.
    pub fn start(&self) -> i64 {
        self.start
    }

    /// Exclusive upper bound.
    pub fn end(&self) -> i64 {
        self.end
    }
}

impl Source for Range {
    type Item = i64;

    #[inline]
    fn len(&self) -> u64 {
        if self.end > self.start {
            self.end.abs_diff(self.start)
        } else {
            0
        }
    }

    #[inline]
    fn at(&self, position: u64) -> i64 {
        self.start.wrapping_add_unsigned(position)
    }
}
