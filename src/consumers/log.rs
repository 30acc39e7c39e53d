//! # Simple logging consumer for debugging and demos.
//!
//! [`LogWriter`] prints every signal to stdout in a human-readable format
//! and then forwards it to the wrapped consumer.
//!
//! ## Output format
//! ```text
//! [next] stream=numbers item=3
//! [error] stream=numbers label=stream_element_failed err="element 3 failed: boom"
//! [complete] stream=numbers
//! ```
//!
//! ## Example
//! ```no_run
//! # use demandflow::{BoxError, Callbacks, LogWriter, Operator, StreamError, UNBOUNDED};
//! let inner = Callbacks::new(|_: i64| Ok::<_, BoxError>(()), |_: StreamError| {}, || {});
//! let sub = Operator::range(0, 3).subscribe_with(LogWriter::new("numbers", inner));
//! sub.request(UNBOUNDED);
//! ```

use std::borrow::Cow;
use std::fmt::Debug;

use crate::consumers::Consume;
use crate::error::{BoxError, StreamError};

/// Stdout logging wrapper around another consumer.
///
/// Enabled via the `logging` feature. Not intended for production use:
/// structured diagnostics are already emitted through `tracing`.
pub struct LogWriter<C> {
    name: Cow<'static, str>,
    inner: C,
}

impl<C> LogWriter<C> {
    /// Wraps `inner`, labelling output lines with `name`.
    pub fn new(name: impl Into<Cow<'static, str>>, inner: C) -> Self {
        Self {
            name: name.into(),
            inner,
        }
    }

    /// Unwraps the inner consumer.
    pub fn into_inner(self) -> C {
        self.inner
    }
}

impl<T, C> Consume<T> for LogWriter<C>
where
    T: Debug,
    C: Consume<T>,
{
    fn on_next(&mut self, item: T) -> Result<(), BoxError> {
        println!("[next] stream={} item={item:?}", self.name);
        self.inner.on_next(item)
    }

    fn on_error(&mut self, error: StreamError) {
        println!(
            "[error] stream={} label={} err={:?}",
            self.name,
            error.as_label(),
            error.to_string()
        );
        self.inner.on_error(error)
    }

    fn on_complete(&mut self) {
        println!("[complete] stream={}", self.name);
        self.inner.on_complete()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Operator;
    use crate::testkit::{Recorder, Signal};

    #[test]
    fn test_forwards_every_signal() {
        let (rec, log) = Recorder::failing_on(1);
        Operator::range(0, 3).subscribe_all_with(LogWriter::new("numbers", rec));

        assert_eq!(log.nexts(), vec![0, 2]);
        assert_eq!(log.error_positions(), vec![Some(1)]);
        assert_eq!(log.signals().last(), Some(&Signal::Complete));
    }

    #[test]
    fn test_into_inner_returns_wrapped_consumer() {
        let (rec, log) = Recorder::new();
        let mut writer = LogWriter::new(String::from("numbers"), rec);
        assert!(writer.on_next(7i64).is_ok());

        let mut rec = writer.into_inner();
        rec.on_complete();
        assert_eq!(log.signals(), vec![Signal::Next(7), Signal::Complete]);
    }
}
