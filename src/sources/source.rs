//! # Source abstraction.
//!
//! A source maps positions `0..len()` to elements. Subscriptions own the
//! cursor; the source itself holds no per-subscription state, which is what
//! makes one [`Operator`](crate::Operator) subscribable many times.

/// # Immutable, position-indexed sequence.
///
/// # Example
/// ```
/// use demandflow::Source;
///
/// struct Squares(u64);
///
/// impl Source for Squares {
///     type Item = u64;
///
///     fn len(&self) -> u64 { self.0 }
///
///     fn at(&self, position: u64) -> u64 { position * position }
/// }
///
/// let s = Squares(4);
/// assert_eq!(s.at(3), 9);
/// assert!(!s.is_empty());
/// ```
pub trait Source: Send + Sync + 'static {
    /// Element type produced by this source.
    type Item;

    /// Number of elements; positions run over `0..len()`.
    fn len(&self) -> u64;

    /// Returns the element at `position`.
    ///
    /// Only called with `position < self.len()`. A panic here is reported
    /// to the consumer as a failure of that element.
    fn at(&self, position: u64) -> Self::Item;

    /// True if the source yields no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
