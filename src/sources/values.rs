//! # Fixed-values source.

use std::sync::Arc;

use super::Source;

/// Source over a fixed, shared slice of values.
///
/// Each emission clones the element at the current position; the slice
/// itself is shared by every subscription.
#[derive(Debug)]
pub struct Values<T> {
    values: Arc<[T]>,
}

impl<T> Values<T> {
    /// Creates a source over `values`.
    pub fn new(values: impl Into<Arc<[T]>>) -> Self {
        Self {
            values: values.into(),
        }
    }

    /// Underlying values.
    pub fn as_slice(&self) -> &[T] {
        &self.values
    }
}

impl<T> Clone for Values<T> {
    fn clone(&self) -> Self {
        Self {
            values: Arc::clone(&self.values),
        }
    }
}

impl<T> Source for Values<T>
where
    T: Clone + Send + Sync + 'static,
{
    type Item = T;

    #[inline]
    fn len(&self) -> u64 {
        self.values.len() as u64
    }

    #[inline]
    fn at(&self, position: u64) -> T {
        self.values[position as usize].clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_are_indexed_in_order() {
        let v = Values::new(vec!["a", "b", "c"]);
        assert_eq!(v.len(), 3);
        assert_eq!(v.at(0), "a");
        assert_eq!(v.at(2), "c");
    }

    #[test]
    fn test_clone_shares_storage() {
        let v = Values::new(vec![String::from("x")]);
        let w = v.clone();
        assert!(std::ptr::eq(v.as_slice(), w.as_slice()));
    }
}
