//! # Source descriptions.
//!
//! A [`Source`] is the immutable part of an [`Operator`](crate::Operator):
//! a position-indexed sequence that any number of subscriptions can read.
//!
//! - [`Source`] - trait for position-indexed sequences
//! - [`Range`] - numeric range `[start, end)` of `i64`
//! - [`Values`] - fixed slice of cloneable values

mod range;
mod source;
mod values;

pub use range::Range;
pub use source::Source;
pub use values::Values;
